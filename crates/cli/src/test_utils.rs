// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use tempfile::{NamedTempFile, TempDir};
use termcolor::Buffer;

use crate::action::{Action, ActionContext};

/// Creates a temp directory with an empty torq.toml.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("torq.toml"), "").unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp file with the given content for testing.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Output buffer without color escapes.
pub fn buffer() -> Buffer {
    Buffer::no_color()
}

/// Text written to a buffer.
pub fn text(buffer: Buffer) -> String {
    String::from_utf8(buffer.into_inner()).unwrap()
}

/// Shared log of which recording actions ran, in order.
pub type RunLog = Rc<RefCell<Vec<&'static str>>>;

/// Action that records its name in a shared log and prints a marker line.
pub struct RecordingAction {
    name: &'static str,
    flag: &'static str,
    log: RunLog,
}

impl RecordingAction {
    pub fn new(name: &'static str, flag: &'static str, log: &RunLog) -> Self {
        Self { name, flag, log: Rc::clone(log) }
    }
}

impl Action for RecordingAction {
    fn name(&self) -> &'static str {
        self.name
    }

    fn flag(&self) -> &'static str {
        self.flag
    }

    fn description(&self) -> &'static str {
        "Records that it ran"
    }

    fn run(&self, ctx: &mut ActionContext<'_>) -> anyhow::Result<()> {
        self.log.borrow_mut().push(self.name);
        writeln!(ctx.out, "ran {}", self.name)?;
        Ok(())
    }
}
