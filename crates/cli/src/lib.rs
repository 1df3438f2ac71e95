// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! torq runs a fixed pipeline of code-quality actions over a file or
//! directory of Python sources: formatting, blank-line normalization,
//! header verification, doctests, and linting.

pub mod action;
pub mod actions;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod pipeline;
pub mod tool;
pub mod walker;

#[cfg(test)]
pub mod test_utils;

pub use action::{Action, ActionContext, RunConfig};
pub use actions::{Registry, all_actions};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use pipeline::Pipeline;
pub use tool::{ToolCommand, ToolOutput};
pub use walker::visit;
