// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! External tool command lines.

use serde::Deserialize;

use super::defaults;

/// Command lines for the delegated tools.
///
/// Each entry is a program followed by leading arguments; torq appends the
/// target path (and for the formatter, the line length option).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub formatter: Vec<String>,
    pub linter: Vec<String>,
    pub doctest: Vec<String>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            formatter: defaults::tools::formatter(),
            linter: defaults::tools::linter(),
            doctest: defaults::tools::doctest(),
        }
    }
}

impl ToolsConfig {
    pub(super) fn validate(&self) -> Result<(), String> {
        for (key, cmd) in
            [("formatter", &self.formatter), ("linter", &self.linter), ("doctest", &self.doctest)]
        {
            if cmd.first().is_none_or(|program| program.trim().is_empty()) {
                return Err(format!("tools.{key} must name a program"));
            }
        }
        Ok(())
    }
}
