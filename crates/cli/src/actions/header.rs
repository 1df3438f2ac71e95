// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! File header verification.
//!
//! The first line of every source file must be a comment whose last word
//! names the file, optionally with leading path segments:
//!
//! ```text
//! # pkg/models.py
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::action::{Action, ActionContext};
use crate::error::Error;
use crate::walker;

pub struct HeaderCheck;

/// Returns true if `first_line` is a valid header for `path`.
///
/// The line must start with `marker`, and its final whitespace-separated
/// token must be a suffix of the path string.
pub fn header_matches(first_line: &str, path: &Path, marker: &str) -> bool {
    if !first_line.starts_with(marker) {
        return false;
    }
    match first_line.split_whitespace().next_back() {
        Some(last) => path.to_string_lossy().ends_with(last),
        None => false,
    }
}

/// Read only the first line of `path`.
fn read_first_line(path: &Path) -> crate::Result<String> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut first = String::new();
    BufReader::new(file).read_line(&mut first).map_err(|e| Error::io(path, e))?;
    Ok(first)
}

impl Action for HeaderCheck {
    fn name(&self) -> &'static str {
        "HeaderCheck"
    }

    fn flag(&self) -> &'static str {
        "headercheck"
    }

    fn description(&self) -> &'static str {
        "Verifies that .py files start with a comment including the file name"
    }

    fn run(&self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        let run = ctx.run;
        walker::visit(&run.target, &run.config.extension, ctx, |path, ctx| {
            let first = read_first_line(path)?;
            if !header_matches(&first, path, &run.config.comment_marker) {
                ctx.finding("File header missing for", path)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
