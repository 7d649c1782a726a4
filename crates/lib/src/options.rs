//! Validated run options.
//!
//! Everything read from the outside world (command line, environment) is
//! checked here once and then carried through the run as immutable values.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::consts::GOMA_ENV;
use crate::execute::BuildError;

/// Build mode for the generated V8 build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
  Debug,
  Release,
}

impl BuildMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "Debug",
      Self::Release => "Release",
    }
  }

  pub fn is_debug(&self) -> bool {
    matches!(self, Self::Debug)
  }
}

impl FromStr for BuildMode {
  type Err = BuildError;

  /// Parses the mode case-sensitively, matching how the embedder spells it.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Debug" => Ok(Self::Debug),
      "Release" => Ok(Self::Release),
      other => Err(BuildError::Configuration(format!(
        "invalid build mode '{other}', expected Debug or Release"
      ))),
    }
  }
}

impl fmt::Display for BuildMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Options for one generate-then-build run.
///
/// Construct through [`BuildOptions::new`], which enforces:
/// - `source_root` is absolute and an existing directory
/// - `build_path` is absolute (it does not need to exist yet)
/// - `host_os` is non-empty
///
/// The host OS is kept as given; whether it is supported is decided when the
/// tools are located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
  mode: BuildMode,
  source_root: PathBuf,
  build_path: PathBuf,
  raw_flags: Vec<String>,
  host_os: String,
}

impl BuildOptions {
  pub fn new(
    mode: &str,
    source_root: &Path,
    build_path: &Path,
    raw_flags: Vec<String>,
    host_os: &str,
  ) -> Result<Self, BuildError> {
    let mode: BuildMode = mode.parse()?;

    if host_os.is_empty() {
      return Err(BuildError::Configuration("host OS must not be empty".to_string()));
    }

    let source_root = dunce::canonicalize(source_root).map_err(|e| {
      BuildError::Configuration(format!("invalid source root {}: {e}", source_root.display()))
    })?;
    if !source_root.is_dir() {
      return Err(BuildError::Configuration(format!(
        "source root is not a directory: {}",
        source_root.display()
      )));
    }

    let build_path = std::path::absolute(build_path).map_err(|e| {
      BuildError::Configuration(format!("invalid build path {}: {e}", build_path.display()))
    })?;

    debug!(
      mode = %mode,
      source_root = %source_root.display(),
      build_path = %build_path.display(),
      flags = raw_flags.len(),
      host_os,
      "validated build options"
    );

    Ok(Self {
      mode,
      source_root,
      build_path,
      raw_flags,
      host_os: host_os.to_string(),
    })
  }

  pub fn mode(&self) -> BuildMode {
    self.mode
  }

  pub fn source_root(&self) -> &Path {
    &self.source_root
  }

  pub fn build_path(&self) -> &Path {
    &self.build_path
  }

  pub fn raw_flags(&self) -> &[String] {
    &self.raw_flags
  }

  pub fn host_os(&self) -> &str {
    &self.host_os
  }
}

/// Everything a run needs, with the environment already folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
  pub options: BuildOptions,
  /// Offload compilation to Goma: adds `use_goma=true` to the GN args and `-j500` to Ninja.
  pub use_goma: bool,
  /// Resolve and print both commands without running them.
  pub dry_run: bool,
}

impl RunConfig {
  pub fn new(options: BuildOptions) -> Self {
    Self {
      options,
      use_goma: false,
      dry_run: false,
    }
  }
}

/// Reads the Goma toggle from the process environment.
///
/// Only the literal value `"1"` enables it; unset or any other value does not.
pub fn goma_enabled_from_env() -> bool {
  std::env::var(GOMA_ENV).is_ok_and(|value| value == "1")
}
