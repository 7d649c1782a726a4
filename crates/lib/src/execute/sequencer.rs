//! The generate-then-build sequence.

use std::path::Path;

use tracing::{info, warn};

use crate::consts::{BUILD_TARGET, GOMA_JOBS_FLAG};
use crate::execute::runner::ToolRunner;
use crate::execute::types::{BuildError, Invocation, RunReport, RunState};
use crate::flags::find_target_os;
use crate::gn::GnArgs;
use crate::options::{BuildOptions, RunConfig};
use crate::platform::{HostOs, Tool, locate_tool};

/// Drives one run: `gn gen`, then Ninja only if generation succeeded.
///
/// Both tools run with the V8 checkout as working directory, one after the
/// other, and each command line is logged before it starts.
#[derive(Debug, Clone, Default)]
pub struct Sequencer<R> {
  runner: R,
}

impl<R: ToolRunner> Sequencer<R> {
  pub fn new(runner: R) -> Self {
    Self { runner }
  }

  pub fn runner(&self) -> &R {
    &self.runner
  }

  /// Runs the sequence described by `config`.
  ///
  /// Returns the first failure; nothing after it runs and nothing is cleaned up.
  pub async fn run(&self, config: &RunConfig) -> Result<RunReport, BuildError> {
    let mut state = RunState::Validated;

    match self.run_steps(config, &mut state).await {
      Ok(report) => {
        state.transition(RunState::Done);
        Ok(report)
      }
      Err(err) => {
        warn!(stage = %state, error = %err, "run failed");
        state.transition(RunState::Failed);
        Err(err)
      }
    }
  }

  async fn run_steps(&self, config: &RunConfig, state: &mut RunState) -> Result<RunReport, BuildError> {
    let options = &config.options;

    state.transition(RunState::Resolving);
    let target_os = find_target_os(options.raw_flags())?;
    let host: HostOs = options.host_os().parse()?;
    let gn = locate_tool(Tool::Generator, host, options.source_root())?;
    let gn_args = GnArgs::assemble(&target_os, options.mode(), options.raw_flags(), config.use_goma);
    let generate = generate_invocation(&gn, options, &gn_args);

    if config.dry_run {
      let ninja = locate_tool(Tool::Executor, host, options.source_root())?;
      let build = build_invocation(&ninja, options, config.use_goma);
      info!(cmd = %generate, "dry run: would run GN");
      info!(cmd = %build, "dry run: would run Ninja");
      return Ok(RunReport {
        generate,
        build,
        executed: false,
      });
    }

    state.transition(RunState::Generating);
    info!(cmd = %generate, "running GN");
    let code = self.runner.run(&generate).await?;
    if code != 0 {
      return Err(BuildError::GenerationFailed { code });
    }

    let ninja = locate_tool(Tool::Executor, host, options.source_root())?;
    let build = build_invocation(&ninja, options, config.use_goma);

    state.transition(RunState::Building);
    info!(cmd = %build, "building via Ninja");
    let code = self.runner.run(&build).await?;
    if code != 0 {
      return Err(BuildError::BuildFailed { code });
    }

    info!(artifact = BUILD_TARGET, build_path = %options.build_path().display(), "build complete");

    Ok(RunReport {
      generate,
      build,
      executed: true,
    })
  }
}

/// `gn gen <build_path> --args=<args>`
pub fn generate_invocation(gn: &Path, options: &BuildOptions, args: &GnArgs) -> Invocation {
  Invocation {
    program: gn.to_path_buf(),
    args: vec![
      "gen".to_string(),
      options.build_path().to_string_lossy().into_owned(),
      args.to_gen_arg(),
    ],
    cwd: options.source_root().to_path_buf(),
  }
}

/// `ninja -v -C <build_path> v8_monolith [-j500]`
pub fn build_invocation(ninja: &Path, options: &BuildOptions, use_goma: bool) -> Invocation {
  let mut args = vec![
    "-v".to_string(),
    "-C".to_string(),
    options.build_path().to_string_lossy().into_owned(),
    BUILD_TARGET.to_string(),
  ];
  if use_goma {
    args.push(GOMA_JOBS_FLAG.to_string());
  }

  Invocation {
    program: ninja.to_path_buf(),
    args,
    cwd: options.source_root().to_path_buf(),
  }
}
