//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Tool command lines that succeed without any Python tooling installed.
pub const FAKE_TOOLS: &str = r#"
[tools]
formatter = ["true"]
linter = ["true"]
doctest = ["true"]
"#;

/// Returns a Command configured to run the torq binary
pub fn torq_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("torq"));
    cmd.env_remove("TORQ_CONFIG").env_remove("TORQ_LOG").env("NO_COLOR", "1");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A scratch project in a temp directory with its own git root, so config
/// discovery never escapes it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// A project whose torq.toml replaces every external tool with `true`.
    pub fn with_fake_tools() -> Self {
        let project = Self::empty();
        project.config(FAKE_TOOLS);
        project
    }

    /// Copy a fixture directory into a fresh project.
    pub fn from_fixture(name: &str) -> Self {
        let project = Self::with_fake_tools();
        copy_dir(&fixture(name), project.path());
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self, content: &str) {
        self.file("torq.toml", content);
    }

    pub fn file(&self, path: &str, content: &str) {
        let full = self.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).unwrap()
    }

    /// torq invoked from the project root.
    pub fn torq(&self) -> Command {
        let mut cmd = torq_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

fn copy_dir(from: &Path, to: &Path) {
    std::fs::create_dir_all(to).unwrap();
    for entry in std::fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let dest = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &dest);
        } else {
            std::fs::copy(entry.path(), dest).unwrap();
        }
    }
}
