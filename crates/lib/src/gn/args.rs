//! Assembly of the GN `--args=` value.

use crate::flags::translate_flags;
use crate::options::BuildMode;

/// Build posture every monolith build starts from: one static library, no
/// component build, no external snapshot blobs, the system C++ library.
pub const BASELINE_ARGS: [&str; 4] = [
  "v8_monolithic=true",
  "is_component_build=false",
  "v8_use_external_startup_data=false",
  "use_custom_libcxx=false",
];

/// The ordered GN args for one run.
///
/// Nothing is deduplicated: when the embedder repeats a key, GN decides which
/// one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GnArgs(Vec<String>);

impl GnArgs {
  /// Builds the args in this order:
  /// 1. [`BASELINE_ARGS`]
  /// 2. `use_sysroot=false` unless targeting Windows
  /// 3. the embedder's flags, translated to GN
  /// 4. `is_debug=true|false`
  /// 5. `use_goma=true` when Goma is enabled
  pub fn assemble<S: AsRef<str>>(target_os: &str, mode: BuildMode, flags: &[S], use_goma: bool) -> Self {
    let mut args: Vec<String> = BASELINE_ARGS.iter().map(|arg| arg.to_string()).collect();

    if target_os != "win" {
      args.push("use_sysroot=false".to_string());
    }

    args.extend(translate_flags(flags));

    args.push(format!("is_debug={}", mode.is_debug()));

    if use_goma {
      args.push("use_goma=true".to_string());
    }

    Self(args)
  }

  pub fn as_slice(&self) -> &[String] {
    &self.0
  }

  /// Renders the single `--args=...` argument passed to `gn gen`.
  pub fn to_gen_arg(&self) -> String {
    format!("--args={}", self.0.join(" "))
  }
}
