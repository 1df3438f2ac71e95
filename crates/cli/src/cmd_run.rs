// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Runs the pipeline for a parsed command line.

use std::io::Write;

use torq::cli::Invocation;
use torq::config::{self, Config};
use torq::discovery;
use torq::error::{Error, ExitCode};
use torq::{Pipeline, RunConfig, color};

/// Run torq for `invocation`.
///
/// Findings are advisory: a completed run always yields `ExitCode::Success`.
pub fn run(invocation: Invocation, pipeline: &Pipeline) -> anyhow::Result<ExitCode> {
    let Invocation { cli, disabled } = invocation;

    if cli.actions {
        let mut stdout = std::io::stdout().lock();
        pipeline.describe(&mut stdout)?;
        stdout.flush()?;
        return Ok(ExitCode::Success);
    }

    let Some(target) = cli.filename else {
        anyhow::bail!("a file or directory to process is required");
    };
    if !target.exists() {
        return Err(Error::TargetNotFound(target).into());
    }

    let config = match cli.config.or_else(|| discovery::find_config(&target)) {
        Some(path) => config::load(&path)?,
        None => Config::default(),
    };

    let run = RunConfig { target, quiet: cli.quiet, disabled, config };
    tracing::debug!("running on {} with {:?} disabled", run.target.display(), run.disabled);

    let mut out = color::stdout();
    pipeline.run(&run, &mut out)?;
    Ok(ExitCode::Success)
}
