// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Linter invocation and output capture.

use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Default linter command.
pub const DEFAULT_COMMAND: [&str; 3] = ["npx", "bonzai-burn", "-b"];

/// Program and arguments of the linter command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tokens: Vec<String>,
}

impl Invocation {
    /// Build an invocation from command-line tokens. The first token is the program.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(Error::EmptyCommand);
        }
        Ok(Self { tokens })
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// Run to completion with stdin closed and both output streams captured.
    ///
    /// A non-zero exit status is not an error; only a failure to launch is.
    pub fn run(&self) -> Result<CapturedOutput> {
        tracing::debug!(command = %self, "running linter");

        let output = Command::new(self.program())
            .args(self.args())
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program().to_string(),
                source,
            })?;

        let captured = CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        };
        tracing::debug!(
            status = ?captured.status,
            stdout_bytes = captured.stdout.len(),
            stderr_bytes = captured.stderr.len(),
            "linter finished"
        );
        Ok(captured)
    }
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_COMMAND.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Output of one linter run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit status; `None` when the process was killed by a signal.
    pub status: Option<i32>,
}

#[cfg(test)]
#[path = "linter_tests.rs"]
mod tests;
