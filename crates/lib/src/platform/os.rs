use std::fmt;
use std::str::FromStr;

use crate::execute::BuildError;

/// Host operating systems the V8 toolchain ships GN and Ninja binaries for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOs {
  Linux,
  Mac,
  Win,
}

/// Per-host layout of the fetched toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HostLayout {
  id: &'static str,
  buildtools_dir: &'static str,
  exe_suffix: &'static str,
}

const LINUX: HostLayout = HostLayout {
  id: "linux",
  buildtools_dir: "linux64",
  exe_suffix: "",
};

const MAC: HostLayout = HostLayout {
  id: "mac",
  buildtools_dir: "mac",
  exe_suffix: "",
};

const WIN: HostLayout = HostLayout {
  id: "win",
  buildtools_dir: "win",
  exe_suffix: ".exe",
};

impl HostOs {
  pub const ALL: [HostOs; 3] = [Self::Linux, Self::Mac, Self::Win];

  fn layout(&self) -> &'static HostLayout {
    match self {
      Self::Linux => &LINUX,
      Self::Mac => &MAC,
      Self::Win => &WIN,
    }
  }

  /// Returns the identifier the embedder passes for this host
  pub fn as_str(&self) -> &'static str {
    self.layout().id
  }

  /// Subdirectory of `buildtools/` holding this host's GN binary
  pub fn buildtools_dir(&self) -> &'static str {
    self.layout().buildtools_dir
  }

  /// Suffix for native executables on this host
  pub fn exe_suffix(&self) -> &'static str {
    self.layout().exe_suffix
  }
}

impl FromStr for HostOs {
  type Err = BuildError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|os| os.as_str() == s)
      .ok_or_else(|| BuildError::UnsupportedPlatform(s.to_string()))
  }
}

impl fmt::Display for HostOs {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
