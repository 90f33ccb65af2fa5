// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort success announcement.
//!
//! The announcement is fire-and-forget: the child is never awaited and a
//! launch failure is logged, not returned.

use std::process::{Command, Stdio};

/// Default announcement program (macOS text-to-speech).
pub const DEFAULT_PROGRAM: &str = "say";

/// Default announcement text.
pub const DEFAULT_TEXT: &str = "Bonzai burn complete";

/// Sends the success announcement.
pub trait Announcer {
    /// Launch the announcement. Never fails from the caller's point of view.
    fn announce(&self, text: &str);
}

/// Announcer that spawns `program <text>` and does not wait for it.
#[derive(Debug, Clone)]
pub struct CommandAnnouncer {
    program: String,
}

impl CommandAnnouncer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandAnnouncer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Announcer for CommandAnnouncer {
    // The child is left running; this process exits right after.
    #[allow(clippy::zombie_processes)]
    fn announce(&self, text: &str) {
        let spawned = Command::new(&self.program)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                tracing::debug!(program = %self.program, pid = child.id(), "announcement launched");
            }
            Err(e) => {
                tracing::warn!(program = %self.program, error = %e, "announcement failed");
            }
        }
    }
}


#[cfg(test)]
#[path = "announce_tests.rs"]
mod tests;
