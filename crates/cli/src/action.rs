// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Action trait and run context.
//!
//! An action is one step of the pipeline. Each declares a static identity
//! and opt-out flag, contributes `--no-<flag>` to the CLI, and runs once.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Arg, ArgAction};
use termcolor::WriteColor;

use crate::color::{scheme, write_styled};
use crate::config::Config;
use crate::tool::{ToolCommand, ToolOutput};

/// One step of the torq pipeline.
pub trait Action {
    /// Identity shown in notices and `--actions`.
    fn name(&self) -> &'static str;

    /// Opt-out flag name (lower-cased identity); surfaced as `--no-<flag>`.
    fn flag(&self) -> &'static str;

    /// Documentation shown by `--actions`.
    fn description(&self) -> &'static str;

    /// Perform the action's work.
    ///
    /// Expected failures of delegated tools are reported, not returned.
    fn run(&self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()>;

    /// Register this action's opt-out flag.
    fn add_arguments(&self, command: clap::Command) -> clap::Command {
        command.arg(
            Arg::new(opt_out_id(self.flag()))
                .long(opt_out_id(self.flag()))
                .action(ArgAction::SetTrue)
                .help(format!("Stops the {} action from running", self.flag())),
        )
    }
}

/// Argument id and long name of the opt-out flag for `flag`.
pub fn opt_out_id(flag: &str) -> String {
    format!("no-{}", flag)
}

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// File or directory to process.
    pub target: PathBuf,
    /// Suppress progress notices.
    pub quiet: bool,
    /// Flags of actions disabled for this run.
    pub disabled: BTreeSet<String>,
    pub config: Config,
}

impl RunConfig {
    pub fn new(target: impl Into<PathBuf>, config: Config) -> Self {
        Self { target: target.into(), quiet: false, disabled: BTreeSet::new(), config }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn disable(mut self, flag: &str) -> Self {
        self.disabled.insert(flag.to_string());
        self
    }

    pub fn is_disabled(&self, action: &dyn Action) -> bool {
        self.disabled.contains(action.flag())
    }
}

/// Context handed to a running action: the run configuration plus the
/// output stream for notices and findings.
pub struct ActionContext<'a> {
    pub run: &'a RunConfig,
    pub out: &'a mut dyn WriteColor,
}

impl<'a> ActionContext<'a> {
    pub fn new(run: &'a RunConfig, out: &'a mut dyn WriteColor) -> Self {
        Self { run, out }
    }

    /// Report a finding about a file: `<message> <path>`.
    pub fn finding(&mut self, message: &str, path: &std::path::Path) -> std::io::Result<()> {
        write!(self.out, "{} ", message)?;
        write_styled(self.out, &scheme::path(), &path.display().to_string())?;
        writeln!(self.out)
    }

    /// Run a delegated tool and forward its output.
    ///
    /// A tool that cannot be started is reported and yields None.
    pub fn run_tool(&mut self, command: &ToolCommand) -> std::io::Result<Option<ToolOutput>> {
        let output = match command.run() {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("failed to start {}: {}", command.program(), e);
                write_styled(
                    self.out,
                    &scheme::error(),
                    &format!("{} could not be run: {}", command.program(), e),
                )?;
                writeln!(self.out)?;
                return Ok(None);
            }
        };

        write!(self.out, "{}", output.stdout)?;
        if !output.stderr.is_empty() {
            eprint!("{}", output.stderr);
        }
        if !output.success() {
            tracing::debug!("{} finished with {:?}", command.program(), output.code);
        }
        Ok(Some(output))
    }
}

/// Run `action` unless it is disabled, printing a notice either way
/// (unless quiet).
pub fn run_action(action: &dyn Action, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
    if ctx.run.is_disabled(action) {
        if !ctx.run.quiet {
            write_styled(ctx.out, &scheme::skip(), &format!("🙅 Skipping {}", action.name()))?;
            writeln!(ctx.out)?;
        }
        return Ok(());
    }

    if !ctx.run.quiet {
        write!(ctx.out, "🏃 ")?;
        write_styled(ctx.out, &scheme::action_name(), action.name())?;
        writeln!(ctx.out)?;
    }

    action.run(ctx)
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
