// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes diagnostic output to stderr so stdout stays reserved for the
//! harness payload. Enabled with `--verbose` or `BONZAI_HOOK_VERBOSE=1`.

use std::cell::RefCell;
use std::io::{Stderr, Write};

/// Verbose output logger. Writes to stderr unless given another writer.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger<W: Write = Stderr> {
    enabled: bool,
    out: RefCell<W>,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self::with_writer(enabled, std::io::stderr())
    }
}

impl<W: Write> VerboseLogger<W> {
    pub fn with_writer(enabled: bool, out: W) -> Self {
        Self {
            enabled,
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    /// Print a verbose line (indented as content under a section).
    pub fn log(&self, msg: &str) {
        if self.enabled {
            self.emit(format_args!("  {}\n", msg));
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            self.emit(format_args!("\n{}:\n", title));
        }
    }

    /// Print a section with each line of `text` under it, or `(empty)`.
    pub fn raw(&self, title: &str, text: &str) {
        if !self.enabled {
            return;
        }
        self.section(title);
        if text.trim().is_empty() {
            self.log("(empty)");
        }
        for line in text.lines() {
            self.log(line);
        }
    }

    // Diagnostics must never fail the run.
    fn emit(&self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = self.out.borrow_mut().write_fmt(args) {
            tracing::debug!(error = %e, "verbose output dropped");
        }
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
