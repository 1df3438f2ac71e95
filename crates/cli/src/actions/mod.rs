// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Action registry.
//!
//! The registry is built once at startup. Registration order is execution
//! order, and it is also the order `--actions` documents them in.

mod black;
mod flake;
mod header;
mod single_space;

pub use black::Black;
pub use flake::Flake;
pub use header::{HeaderCheck, header_matches};
pub use repl_test::ReplTest;
pub use single_space::{SingleSpace, collapse_blank_lines};

use crate::action::Action;

/// Ordered list of actions.
#[derive(Default)]
pub struct Registry {
    actions: Vec<Box<dyn Action>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action. No deduplication or validation.
    pub fn register(mut self, action: impl Action + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Action> {
        self.actions.iter().map(|a| a.as_ref())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Register every action's opt-out flag on `command`.
    pub fn add_arguments(&self, command: clap::Command) -> clap::Command {
        self.iter().fold(command, |command, action| action.add_arguments(command))
    }
}

/// The built-in pipeline.
pub fn all_actions() -> Registry {
    Registry::new()
        .register(Black)
        .register(SingleSpace)
        .register(HeaderCheck)
        .register(ReplTest)
        .register(Flake)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
