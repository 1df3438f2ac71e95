// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Formatting via an external formatter (Black by default).

use crate::action::{Action, ActionContext};
use crate::tool::ToolCommand;

pub struct Black;

impl Black {
    /// `<formatter> <target> -l <line_length>`
    pub fn command(ctx: &ActionContext<'_>) -> Option<ToolCommand> {
        let run = ctx.run;
        Some(
            ToolCommand::from_config(&run.config.tools.formatter)?
                .path_arg(&run.target)
                .arg("-l")
                .arg(run.config.line_length.to_string()),
        )
    }
}

impl Action for Black {
    fn name(&self) -> &'static str {
        "Black"
    }

    fn flag(&self) -> &'static str {
        "black"
    }

    fn description(&self) -> &'static str {
        "Runs the Black Python code formatter with the configured line length\n\
         (line_length in torq.toml, 80 by default)"
    }

    fn run(&self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        if let Some(command) = Self::command(ctx) {
            ctx.run_tool(&command)?;
        }
        Ok(())
    }
}
