use crate::execute::BuildError;

const TARGET_OS_PREFIX: &str = "target_os=";

/// Returns the value of the first `target_os=` flag with surrounding quotes stripped.
///
/// Later duplicates are ignored without warning.
pub fn find_target_os<S: AsRef<str>>(flags: &[S]) -> Result<String, BuildError> {
  flags
    .iter()
    .find_map(|flag| flag.as_ref().strip_prefix(TARGET_OS_PREFIX))
    .map(|value| value.trim_matches('"').to_string())
    .ok_or_else(|| BuildError::Configuration("no target_os was set".to_string()))
}
