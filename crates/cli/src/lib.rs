// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! bonzai-hook library.
//!
//! Runs an external linter as an agent Stop hook and turns its output into
//! an allow/block decision for the harness.

pub mod announce;
pub mod cli;
pub mod config;
pub mod error;
pub mod issues;
pub mod linter;
pub mod logging;
pub mod payload;
pub mod reporter;
pub mod settings;
pub mod verbose;


pub use error::{Error, ExitCode, Result};
pub use issues::parse_issues;
pub use linter::{CapturedOutput, Invocation};
pub use payload::HookResponse;
pub use reporter::{Outcome, Reporter, ReporterOptions};
