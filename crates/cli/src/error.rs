// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Exit codes understood by the calling harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// No issues found; the stop may proceed.
    Allow = 0,
    /// The linter could not be run, or a settings file was unusable.
    InternalError = 1,
    /// Issues found; the stop is blocked.
    Block = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors raised by the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("linter command is empty")]
    EmptyCommand,

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a JSON object", path.display())]
    InvalidSettings { path: PathBuf },

    #[error("`{key}` in settings has an unexpected shape")]
    MalformedSettings { key: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
