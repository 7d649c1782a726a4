//! Running external tools.
//!
//! GN and Ninja are opaque to gnbuild: a run only needs their exit code.
//! [`ToolRunner`] is the seam that lets tests replace real processes.

use std::future::Future;
use std::io;
use std::process::ExitStatus;

use tokio::process::Command;
use tracing::debug;

use crate::execute::types::Invocation;

/// Runs one external tool to completion and reports its exit code.
pub trait ToolRunner {
  fn run(&self, invocation: &Invocation) -> impl Future<Output = io::Result<i32>>;
}

/// Runs tools as child processes.
///
/// The child inherits stdin, stdout, stderr and the environment, and is
/// awaited without a timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
  async fn run(&self, invocation: &Invocation) -> io::Result<i32> {
    debug!(
      program = %invocation.program.display(),
      working_dir = %invocation.cwd.display(),
      "spawning process"
    );

    let status = Command::new(&invocation.program)
      .args(&invocation.args)
      .current_dir(&invocation.cwd)
      .status()
      .await?;

    let code = exit_code(status);
    debug!(code, "process exited");
    Ok(code)
  }
}

/// Maps an exit status to a process exit code.
///
/// A child killed by a signal has no code; report `128 + signal` like a
/// POSIX shell does, or 1 where signals don't exist.
fn exit_code(status: ExitStatus) -> i32 {
  if let Some(code) = status.code() {
    return code;
  }

  #[cfg(unix)]
  {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = status.signal() {
      return 128 + signal;
    }
  }

  1
}
