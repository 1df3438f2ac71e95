// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! External tool invocation.
//!
//! Delegated tools run as subprocesses. Their exit status and output are
//! captured and returned; a tool finishing with a non-zero status is a
//! normal outcome, never an error for torq.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// A command line for an external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// Build a command from a configured command line (program, then leading args).
    ///
    /// Returns None for an empty command line.
    pub fn from_config(command_line: &[String]) -> Option<Self> {
        let (program, args) = command_line.split_first()?;
        Some(Self { program: program.clone(), args: args.iter().map(OsString::from).collect() })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a path argument.
    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.as_os_str())
    }

    /// Human-readable command line for logs.
    pub fn display(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    /// Run the tool to completion, capturing its output.
    ///
    /// Fails only if the process could not be started.
    pub fn run(&self) -> std::io::Result<ToolOutput> {
        tracing::debug!("running {}", self.display());
        let output = Command::new(&self.program).args(&self.args).output()?;
        let result = ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!("{} exited with {:?}", self.program, result.code);
        Ok(result)
    }
}

/// Result of running an external tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, or None if the tool was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
