//! Test utilities for gnbuild-lib.
//!
//! This module provides cross-platform helpers for tests that need to execute
//! shell commands, a fetched-looking V8 checkout, and a fake tool runner.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;

use tempfile::TempDir;

use crate::execute::{Invocation, ToolRunner};
use crate::platform::{HostOs, Tool, tool_path};

/// Returns the shell command and args to execute a shell script.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("/bin/sh", vec!["-c".to_string(), script.to_string()])
}

#[cfg(windows)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), script.to_string()])
}

/// Returns the command and args to create a marker file in the current directory.
#[cfg(unix)]
pub fn touch_file(filename: &str) -> (&'static str, Vec<String>) {
  ("/usr/bin/touch", vec![filename.to_string()])
}

#[cfg(windows)]
pub fn touch_file(filename: &str) -> (&'static str, Vec<String>) {
  // Use PowerShell to create an empty file - more reliable than cmd.exe approaches
  (
    "powershell.exe",
    vec![
      "-NoProfile".to_string(),
      "-Command".to_string(),
      format!("New-Item -ItemType File -Path '{}' -Force | Out-Null", filename),
    ],
  )
}

/// Creates a temporary V8 checkout with empty GN and Ninja binaries for `host`.
pub fn fake_source_tree(host: HostOs) -> TempDir {
  let temp = TempDir::new().unwrap();
  for tool in [Tool::Generator, Tool::Executor] {
    let path = tool_path(tool, host, temp.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "").unwrap();
  }
  temp
}

/// A [`ToolRunner`] that records invocations and returns scripted exit codes.
///
/// Once the scripted codes run out every call succeeds.
#[derive(Debug, Default)]
pub struct RecordingRunner {
  calls: RefCell<Vec<Invocation>>,
  exit_codes: RefCell<VecDeque<i32>>,
}

impl RecordingRunner {
  pub fn succeeding() -> Self {
    Self::default()
  }

  pub fn with_exit_codes(codes: impl IntoIterator<Item = i32>) -> Self {
    Self {
      calls: RefCell::default(),
      exit_codes: RefCell::new(codes.into_iter().collect()),
    }
  }

  pub fn calls(&self) -> Vec<Invocation> {
    self.calls.borrow().clone()
  }
}

impl ToolRunner for RecordingRunner {
  async fn run(&self, invocation: &Invocation) -> io::Result<i32> {
    self.calls.borrow_mut().push(invocation.clone());
    Ok(self.exit_codes.borrow_mut().pop_front().unwrap_or(0))
  }
}
