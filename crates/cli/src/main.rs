mod cmd;
mod output;

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gnbuild_lib::consts::{APP_NAME, BUILD_TARGET, GOMA_ENV};

use crate::cmd::BuildArgs;
use crate::output::{OutputFormat, print_error};

/// Build libv8_monolith.a with GN and Ninja.
///
/// Flags use the GYP spelling: booleans as 1/0 and `target_cpu=ia32`. They
/// are translated to GN args before `gn gen` runs.
#[derive(Parser)]
#[command(name = "gnbuild")]
#[command(author, version, about, long_about = None)]
#[command(after_help = format!("Set {GOMA_ENV}=1 to compile {BUILD_TARGET} with Goma."))]
struct Cli {
  #[command(flatten)]
  build: BuildArgs,

  /// Output format for the run summary
  #[arg(short, long, value_enum, default_value_t)]
  output: OutputFormat,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() {
  let cli = Cli::parse();

  let level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("{APP_NAME}={level}")));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .without_time()
    .init();

  if let Err(err) = cmd::cmd_build(&cli.build, cli.output) {
    print_error(&format!("{err:#}"));
    std::process::exit(cmd::exit_code(&err));
  }
}
