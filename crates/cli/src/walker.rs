// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Recursive file visitor filtered by extension.
//!
//! Every file below the root is considered: hidden files and ignore files
//! are not special. Symlinked directories are followed; loops are skipped.

use std::path::Path;

use ignore::WalkBuilder;

use crate::error::Error;

/// Returns true if `path` ends in `ext` (given with its leading dot).
pub fn has_extension(path: &Path, ext: &str) -> bool {
    let wanted = ext.strip_prefix('.').unwrap_or(ext);
    !wanted.is_empty() && path.extension().is_some_and(|e| e == wanted)
}

/// Visit every file matching `ext` under `root`, calling `visit_file` with
/// the file's path and the shared context.
///
/// A matching file root is visited once. A non-matching file root visits
/// nothing. Broken symlinks and symlink loops below the root are skipped;
/// any other error from the walk or the callback stops the visit.
pub fn visit<C, F>(root: &Path, ext: &str, ctx: &mut C, mut visit_file: F) -> anyhow::Result<()>
where
    C: ?Sized,
    F: FnMut(&Path, &mut C) -> anyhow::Result<()>,
{
    if root.is_file() {
        if has_extension(root, ext) {
            visit_file(root, ctx)?;
        }
        return Ok(());
    }

    if !root.exists() {
        let source = std::io::Error::from(std::io::ErrorKind::NotFound);
        return Err(Error::io(root, source).into());
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(true)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_loop(&err) => {
                tracing::warn!("skipping symlink loop: {}", err);
                continue;
            }
            Err(err) if is_dangling(&err) => {
                tracing::warn!("skipping broken link: {}", err);
                continue;
            }
            Err(source) => {
                return Err(Error::Walk { path: root.to_path_buf(), source }.into());
            }
        };

        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if is_file && has_extension(entry.path(), ext) {
            visit_file(entry.path(), ctx)?;
        }
    }

    Ok(())
}

fn is_loop(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop(err),
        _ => false,
    }
}

/// An entry below the root that vanished or points nowhere. The root itself
/// is known to exist by the time the walk starts.
fn is_dangling(err: &ignore::Error) -> bool {
    err.io_error().is_some_and(|e| e.kind() == std::io::ErrorKind::NotFound)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
