// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue reporter: run the linter, decide allow or block.
//!
//! The decision depends only on the linter's stdout. Its exit status and
//! stderr are logged and otherwise ignored.

use std::io::Write;

use crate::announce::{self, Announcer};
use crate::error::{ExitCode, Result};
use crate::issues::parse_issues;
use crate::linter::{CapturedOutput, Invocation};
use crate::payload::HookResponse;
use crate::verbose::VerboseLogger;

/// Options for one reporter run.
#[derive(Debug, Clone)]
pub struct ReporterOptions {
    /// Linter command to run.
    pub command: Invocation,
    /// Launch the announcement when no issues are found.
    pub announce_on_success: bool,
    /// Text passed to the announcement program.
    pub announce_text: String,
    /// Echo raw linter output to stderr.
    pub verbose: bool,
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self {
            command: Invocation::default(),
            announce_on_success: false,
            announce_text: announce::DEFAULT_TEXT.to_string(),
            verbose: false,
        }
    }
}

/// Result of inspecting the linter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No issues; the stop may proceed.
    Allow,
    /// Issues found; carries the payload for the harness.
    Block(HookResponse),
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Allow => ExitCode::Allow,
            Outcome::Block(_) => ExitCode::Block,
        }
    }
}

/// Decide the outcome for captured linter output.
pub fn decide(captured: &CapturedOutput) -> Outcome {
    let issues = parse_issues(&captured.stdout);
    tracing::debug!(count = issues.len(), "parsed issues");
    if issues.is_empty() {
        Outcome::Allow
    } else {
        Outcome::Block(HookResponse::block(&issues))
    }
}

/// Runs the linter and reports to the harness.
pub struct Reporter<'a, A: Announcer> {
    options: &'a ReporterOptions,
    announcer: &'a A,
}

impl<'a, A: Announcer> Reporter<'a, A> {
    pub fn new(options: &'a ReporterOptions, announcer: &'a A) -> Self {
        Self { options, announcer }
    }

    /// Run the linter to completion, then report.
    pub fn run(&self, out: &mut impl Write) -> Result<ExitCode> {
        let captured = self.options.command.run()?;
        self.report(&captured, out)
    }

    /// Report on already-captured output.
    ///
    /// Blocking: writes the JSON payload and a newline to `out`.
    /// Allowing: echoes raw stdout and stderr when verbose and fires the
    /// announcement when enabled. Nothing is written to `out`.
    pub fn report(&self, captured: &CapturedOutput, out: &mut impl Write) -> Result<ExitCode> {
        if let Some(status) = captured.status.filter(|s| *s != 0) {
            tracing::debug!(status, "linter exited non-zero");
        }
        if !captured.stderr.trim().is_empty() {
            tracing::debug!(stderr = %captured.stderr.trim(), "linter stderr");
        }

        let outcome = decide(captured);
        match &outcome {
            Outcome::Block(response) => {
                writeln!(out, "{}", response.to_json()?)?;
                out.flush()?;
            }
            Outcome::Allow => {
                let verbose = VerboseLogger::new(self.options.verbose);
                verbose.raw("linter stdout", &captured.stdout);
                verbose.raw("linter stderr", &captured.stderr);
                if self.options.announce_on_success {
                    self.announcer.announce(&self.options.announce_text);
                }
            }
        }
        Ok(outcome.exit_code())
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
