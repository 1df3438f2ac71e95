// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Sequential action pipeline.
//!
//! Runs every registered action in registration order, printing a blank
//! separator line after each one, skipped or not. There are no retries and
//! no rollback: side effects land as each action runs.

use std::io::Write;

use termcolor::WriteColor;

use crate::action::{ActionContext, RunConfig, run_action};
use crate::actions::Registry;

/// The pipeline executes registered actions in order.
pub struct Pipeline {
    registry: Registry,
}

impl Pipeline {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Run all actions against `run.target`.
    ///
    /// The first unexpected error (file I/O, walk failure) aborts the run.
    pub fn run(&self, run: &RunConfig, out: &mut dyn WriteColor) -> anyhow::Result<()> {
        for action in self.registry.iter() {
            tracing::debug!("action {}", action.name());
            let mut ctx = ActionContext::new(run, &mut *out);
            run_action(action, &mut ctx)?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write the `--actions` listing: each action's name and its
    /// documentation, indented, in execution order.
    pub fn describe(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Torquemada Actions")?;
        writeln!(out, "==================")?;
        writeln!(out)?;
        writeln!(
            out,
            "torq runs a series of actions on the file or directory passed in on the \
             command line. Each action can be turned off with a \"--no-/action/\" \
             argument, where \"/action/\" is replaced with the name of the action."
        )?;
        writeln!(out)?;
        writeln!(out, "The following actions are run in this order:")?;
        writeln!(out)?;

        for action in self.registry.iter() {
            writeln!(out, "{}:", action.name())?;
            for line in action.description().lines() {
                writeln!(out, "    {}", line)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
