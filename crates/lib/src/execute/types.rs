//! Types for running the generate-then-build sequence.
//!
//! This module defines the error taxonomy, the run state machine and the
//! command descriptions handed to a [`ToolRunner`](super::ToolRunner).

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::consts::CONFIG_EXIT_CODE;
use crate::platform::Tool;

/// Errors that abort a run. None of them are retried.
#[derive(Debug, Error)]
pub enum BuildError {
  /// Bad or missing input, detected before any subprocess runs.
  #[error("configuration error: {0}")]
  Configuration(String),

  /// The host OS has no toolchain layout.
  #[error("operating system not supported by GN: {0}")]
  UnsupportedPlatform(String),

  /// The fetched toolchain does not contain the expected binary.
  #[error("{tool} not found at {}", .path.display())]
  ToolNotFound { tool: Tool, path: PathBuf },

  /// `gn gen` exited non-zero.
  #[error("GN generation failed with exit code {code}")]
  GenerationFailed { code: i32 },

  /// Ninja exited non-zero.
  #[error("Ninja build failed with exit code {code}")]
  BuildFailed { code: i32 },

  /// A tool could not be spawned or waited on.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl BuildError {
  /// Whether the failure was detected before any subprocess ran.
  pub fn is_configuration(&self) -> bool {
    matches!(
      self,
      Self::Configuration(_) | Self::UnsupportedPlatform(_) | Self::ToolNotFound { .. }
    )
  }

  /// Process exit code for this failure: the tool's own code for tool
  /// failures, [`CONFIG_EXIT_CODE`] for configuration failures.
  pub fn exit_code(&self) -> i32 {
    match self {
      Self::GenerationFailed { code } | Self::BuildFailed { code } => *code,
      Self::Configuration(_) | Self::UnsupportedPlatform(_) | Self::ToolNotFound { .. } => CONFIG_EXIT_CODE,
      Self::Io(_) => 1,
    }
  }
}

/// Stages of a run.
///
/// `Validated → Resolving → Generating → Building → Done`; any error moves
/// straight to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
  Validated,
  Resolving,
  Generating,
  Building,
  Done,
  Failed,
}

impl RunState {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Validated => "validated",
      Self::Resolving => "resolving",
      Self::Generating => "generating",
      Self::Building => "building",
      Self::Done => "done",
      Self::Failed => "failed",
    }
  }

  pub fn is_terminal(&self) -> bool {
    matches!(self, Self::Done | Self::Failed)
  }

  pub(crate) fn transition(&mut self, next: RunState) {
    debug!(from = %self, to = %next, "run state");
    *self = next;
  }
}

impl fmt::Display for RunState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// A fully resolved command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
  pub program: PathBuf,
  pub args: Vec<String>,
  pub cwd: PathBuf,
}

impl Invocation {
  /// Renders the command so it can be pasted into a POSIX shell.
  pub fn command_line(&self) -> String {
    let program = self.program.to_string_lossy();
    std::iter::once(shell_quote(&program))
      .chain(self.args.iter().map(|arg| shell_quote(arg)))
      .collect::<Vec<_>>()
      .join(" ")
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.command_line())
  }
}

fn shell_quote(arg: &str) -> String {
  let plain = !arg.is_empty()
    && arg
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '=' | ':' | ',' | '+'));
  if plain {
    arg.to_string()
  } else {
    format!("'{}'", arg.replace('\'', r"'\''"))
  }
}

/// What a run did (or, for a dry run, would do).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
  pub generate: Invocation,
  pub build: Invocation,
  /// `false` for dry runs.
  pub executed: bool,
}
