// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! CLI argument parsing.
//!
//! Global flags are declared with clap derive; each registered action then
//! contributes its own `--no-<action>` flag to the command.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::action::opt_out_id;
use crate::actions::Registry;

const LONG_ABOUT: &str = "\
torq is a combination style checker and linter for Python scripts. It is used \
to verify compliance for code displayed in example files or a screencast, with \
a very particular, very opinionated style. Any code run through torq is \
formatted with Black, corrected to remove double blank lines, checked for file \
headers, has its .repl examples run through doctest, and is linted with Flake8.

Run \"torq --actions\" for a detailed list of what each action does and in what \
order.";

/// Runs a pipeline of formatting and linting actions over Python sources
#[derive(Parser, Debug)]
#[command(name = "torq")]
#[command(version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Silences messages that are not errors
    #[arg(long)]
    pub quiet: bool,

    /// Displays information on the actions torq runs
    #[arg(long)]
    pub actions: bool,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "TORQ_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name of file or directory to process
    #[arg(required_unless_present = "actions")]
    pub filename: Option<PathBuf>,
}

/// Parsed command line: global flags plus the opt-out flags that were set.
#[derive(Debug)]
pub struct Invocation {
    pub cli: Cli,
    /// Flags of actions disabled with `--no-<action>`.
    pub disabled: BTreeSet<String>,
}

/// Build the full command: global flags plus every action's opt-out flag.
pub fn build_cli(registry: &Registry) -> clap::Command {
    registry.add_arguments(Cli::command())
}

/// Parse `args` (including the program name) against `registry`.
pub fn parse_args_from<I, T>(registry: &Registry, args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli(registry).try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    let disabled = registry
        .iter()
        .filter(|action| matches.get_flag(&opt_out_id(action.flag())))
        .map(|action| action.flag().to_string())
        .collect();
    Ok(Invocation { cli, disabled })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
