// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Centralized default values for configuration.

/// Maximum line length passed to the formatter.
pub const LINE_LENGTH: usize = 80;

/// Source files every per-file action looks at.
pub const EXTENSION: &str = ".py";

/// Interactive example files run through doctest.
pub const REPL_EXTENSION: &str = ".repl";

/// A header line must start with this.
pub const COMMENT_MARKER: &str = "#";

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "torq.toml";

/// Default external tool command lines.
pub mod tools {
    pub fn formatter() -> Vec<String> {
        vec!["black".to_string()]
    }

    pub fn linter() -> Vec<String> {
        vec!["flake8".to_string()]
    }

    pub fn doctest() -> Vec<String> {
        vec!["python3".to_string(), "-m".to_string(), "doctest".to_string()]
    }
}
