// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Terminal color handling for progress notices and findings.

use std::io::IsTerminal;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Resolve the color choice for stdout.
///
/// `NO_COLOR` always wins; otherwise color is only used on a terminal.
pub fn resolve_color(is_terminal: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Open stdout with the color choice for the current environment.
pub fn stdout() -> StandardStream {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    StandardStream::stdout(resolve_color(std::io::stdout().is_terminal(), no_color))
}

/// Write `text` in `spec`, then reset.
pub fn write_styled(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Color scheme for torq output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Action name in a running notice.
    pub fn action_name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Skip notice.
    pub fn skip() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// File path in a finding.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Tool failures.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
