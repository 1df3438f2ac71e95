// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Christopher Trudeau

//! Error types and process exit codes.

use std::path::PathBuf;

/// Errors that abort a torq run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target path does not exist.
    #[error("{}: no such file or directory", .0.display())]
    TargetNotFound(PathBuf),

    /// The configuration file could not be read or parsed.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A file could not be read or written.
    #[error("{}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walk failed.
    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    /// Exit code this error maps to.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Config { .. } => ExitCode::ConfigError,
            Error::TargetNotFound(_) | Error::Io { .. } | Error::Walk { .. } => {
                ExitCode::InternalError
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
///
/// Findings (missing headers, lint output, failing doctests) are advisory and
/// never change the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    InternalError = 1,
    ConfigError = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
