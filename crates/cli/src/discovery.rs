// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Config file discovery.
//!
//! Walks from the target up to the git root looking for torq.toml.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Find torq.toml starting from `target` and walking up to git root.
///
/// A file target starts the search in its parent directory.
pub fn find_config(target: &Path) -> Option<PathBuf> {
    let start = if target.is_file() { target.parent()? } else { target };
    let mut current = if start.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        start.to_path_buf()
    };
    if let Ok(canonical) = current.canonicalize() {
        current = canonical;
    }

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
