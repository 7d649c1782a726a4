//! Location of the GN and Ninja binaries inside a V8 checkout.
//!
//! The toolchain is fetched before gnbuild runs; this module only computes
//! where each binary should be and checks that it is there.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::{BUILDTOOLS_DIR, DEPOT_TOOLS_DIR};
use crate::execute::BuildError;
use crate::platform::HostOs;

/// External tools driven by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
  /// GN, which writes the Ninja files.
  Generator,
  /// Ninja, which runs the build.
  Executor,
}

impl Tool {
  pub fn name(&self) -> &'static str {
    match self {
      Self::Generator => "gn",
      Self::Executor => "ninja",
    }
  }
}

impl fmt::Display for Tool {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Returns the expected path of `tool` for `host` under `source_root`.
///
/// - GN: `buildtools/<host dir>/gn`. GN ships an extension-less launcher on every host.
/// - Ninja: `_depot_tools/ninja`, with `.exe` on Windows where the bare name is a shell script.
pub fn tool_path(tool: Tool, host: HostOs, source_root: &Path) -> PathBuf {
  match tool {
    Tool::Generator => source_root
      .join(BUILDTOOLS_DIR)
      .join(host.buildtools_dir())
      .join(tool.name()),
    Tool::Executor => source_root
      .join(DEPOT_TOOLS_DIR)
      .join(format!("{}{}", tool.name(), host.exe_suffix())),
  }
}

/// Resolves `tool` and checks that the binary exists.
pub fn locate_tool(tool: Tool, host: HostOs, source_root: &Path) -> Result<PathBuf, BuildError> {
  let path = tool_path(tool, host, source_root);
  if !path.is_file() {
    return Err(BuildError::ToolNotFound { tool, path });
  }
  debug!(tool = %tool, host = %host, path = %path.display(), "located tool");
  Ok(path)
}
