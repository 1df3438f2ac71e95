// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Blank-line normalization.
//!
//! Collapses runs of blank lines to a single blank line and strips leading
//! blank lines, undoing the double spacing Black puts between top-level
//! definitions.

use std::path::Path;

use crate::action::{Action, ActionContext};
use crate::error::Error;
use crate::walker;

pub struct SingleSpace;

/// Drop every blank line that follows another blank line.
///
/// The line before the first line counts as blank, so leading blank lines
/// are dropped too. Whitespace-only lines are blank. Line endings are kept
/// as they are.
pub fn collapse_blank_lines(content: &str) -> String {
    let mut collapsed = String::with_capacity(content.len());
    let mut prev_blank = true;
    for line in content.split_inclusive('\n') {
        let blank = line.trim().is_empty();
        if !blank || !prev_blank {
            collapsed.push_str(line);
        }
        prev_blank = blank;
    }
    collapsed
}

/// Collapse blank lines in `path`, rewriting it only if something changed.
///
/// Returns true if the file was rewritten.
pub fn single_space_file(path: &Path) -> crate::Result<bool> {
    let current = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let replaced = collapse_blank_lines(&current);
    if replaced == current {
        return Ok(false);
    }
    std::fs::write(path, replaced).map_err(|e| Error::io(path, e))?;
    Ok(true)
}

impl Action for SingleSpace {
    fn name(&self) -> &'static str {
        "SingleSpace"
    }

    fn flag(&self) -> &'static str {
        "singlespace"
    }

    fn description(&self) -> &'static str {
        "Removes double blank lines on files ending in .py, undoing part of the\n\
         Black formatting"
    }

    fn run(&self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        let run = ctx.run;
        walker::visit(&run.target, &run.config.extension, ctx, |path, ctx| {
            if single_space_file(path)? {
                ctx.finding("Single spaced", path)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "single_space_tests.rs"]
mod tests;
