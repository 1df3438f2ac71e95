// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Linting via an external linter (Flake8 by default).

use crate::action::{Action, ActionContext};
use crate::tool::ToolCommand;

pub struct Flake;

impl Flake {
    /// `<linter> <target>`
    pub fn command(ctx: &ActionContext<'_>) -> Option<ToolCommand> {
        let run = ctx.run;
        Some(ToolCommand::from_config(&run.config.tools.linter)?.path_arg(&run.target))
    }
}

impl Action for Flake {
    fn name(&self) -> &'static str {
        "Flake"
    }

    fn flag(&self) -> &'static str {
        "flake"
    }

    fn description(&self) -> &'static str {
        "Runs the Flake8 Python linter"
    }

    fn run(&self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        if let Some(command) = Self::command(ctx) {
            ctx.run_tool(&command)?;
        }
        Ok(())
    }
}
