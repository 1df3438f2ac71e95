// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Configuration loaded from `torq.toml`.
//!
//! Every key is optional; a missing file yields [`Config::default`].

pub mod defaults;
mod tools;

pub use tools::ToolsConfig;

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level torq configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum line length handed to the formatter.
    pub line_length: usize,

    /// Extension of source files (with leading dot).
    pub extension: String,

    /// Extension of interactive example files run through doctest.
    pub repl_extension: String,

    /// Marker a header line must start with.
    pub comment_marker: String,

    /// External tool command lines.
    pub tools: ToolsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_length: defaults::LINE_LENGTH,
            extension: defaults::EXTENSION.to_string(),
            repl_extension: defaults::REPL_EXTENSION.to_string(),
            comment_marker: defaults::COMMENT_MARKER.to_string(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text. `path` is only used in errors.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: String| Error::Config { path: path.to_path_buf(), message };

        if self.line_length == 0 {
            return Err(invalid("line_length must be greater than zero".to_string()));
        }
        for (key, ext) in [("extension", &self.extension), ("repl_extension", &self.repl_extension)]
        {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(invalid(format!("{key} must look like \".py\", got {ext:?}")));
            }
        }
        if self.comment_marker.is_empty() {
            return Err(invalid("comment_marker must not be empty".to_string()));
        }
        self.tools.validate().map_err(invalid)
    }
}

/// Load configuration from a file.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = Config::parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
