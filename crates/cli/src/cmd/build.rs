//! Implementation of the build run.
//!
//! Validates the command line, folds in the Goma toggle from the environment,
//! and drives GN then Ninja on a single-threaded runtime.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use gnbuild_lib::consts::BUILD_TARGET;
use gnbuild_lib::execute::{self, BuildError, RunReport};
use gnbuild_lib::options::{BuildOptions, RunConfig, goma_enabled_from_env};

use crate::output::{OutputFormat, format_duration, print_info, print_json, print_stat, print_success};

#[derive(Debug, Args)]
pub struct BuildArgs {
  /// Build mode: Debug or Release
  #[arg(long)]
  pub mode: String,

  /// Path to the V8 checkout
  #[arg(long = "v8-path", alias = "v8_path", value_name = "DIR")]
  pub v8_path: PathBuf,

  /// Path to the build output directory
  #[arg(long = "build-path", alias = "build_path", value_name = "DIR")]
  pub build_path: PathBuf,

  /// Current operating system: linux, mac or win
  #[arg(long = "host-os", alias = "host_os", value_name = "OS")]
  pub host_os: String,

  /// GYP-style flag to translate to GN (repeatable), e.g. target_cpu=ia32
  #[arg(long = "flag", value_name = "KEY=VALUE")]
  pub flags: Vec<String>,

  /// Print the GN and Ninja commands without running them
  #[arg(long)]
  pub dry_run: bool,
}

pub fn cmd_build(args: &BuildArgs, format: OutputFormat) -> Result<()> {
  let options = BuildOptions::new(
    &args.mode,
    &args.v8_path,
    &args.build_path,
    args.flags.clone(),
    &args.host_os,
  )?;

  let config = RunConfig {
    options,
    use_goma: goma_enabled_from_env(),
    dry_run: args.dry_run,
  };
  debug!(use_goma = config.use_goma, dry_run = config.dry_run, "run configuration");

  let rt = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;

  let start = Instant::now();
  let report = rt.block_on(execute::run(&config))?;

  if format.is_json() {
    return print_json(&report);
  }

  print_report(&report, &config);
  if report.executed {
    print_stat("Elapsed", &format_duration(start.elapsed()));
  }

  Ok(())
}

fn print_report(report: &RunReport, config: &RunConfig) {
  if !report.executed {
    print_info("Dry run, nothing was executed");
    println!("{}", report.generate);
    println!("{}", report.build);
    return;
  }

  print_success(&format!("Built {}", BUILD_TARGET));
  print_stat("Mode", config.options.mode().as_str());
  print_stat("Output", &config.options.build_path().display().to_string());
  if config.use_goma {
    print_stat("Goma", "enabled");
  }
}

/// Maps a failed run to the process exit code.
///
/// Tool failures forward the tool's code, configuration failures use the
/// reserved code, anything else exits with 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
  err.downcast_ref::<BuildError>().map_or(1, BuildError::exit_code)
}
