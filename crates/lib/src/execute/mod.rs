//! Generate-then-build execution.
//!
//! This module provides the entry point for a run. It handles:
//! - Resolving the target OS and the GN/Ninja binaries
//! - Assembling the GN args and both command lines
//! - Running GN, then Ninja only if GN succeeded
//! - Mapping failures to process exit codes

pub mod runner;
pub mod sequencer;
pub mod types;

pub use runner::{ProcessRunner, ToolRunner};
pub use sequencer::{Sequencer, build_invocation, generate_invocation};
pub use types::{BuildError, Invocation, RunReport, RunState};

use crate::options::RunConfig;

/// Runs `config` with real child processes.
pub async fn run(config: &RunConfig) -> Result<RunReport, BuildError> {
  Sequencer::new(ProcessRunner).run(config).await
}
