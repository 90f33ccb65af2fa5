//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing bonzai-hook CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use tempfile::TempDir;

/// Environment variables that would leak host configuration into a run.
const HOOK_ENV: &[&str] = &[
    "BONZAI_HOOK_ANNOUNCE",
    "BONZAI_HOOK_ANNOUNCE_PROGRAM",
    "BONZAI_HOOK_ANNOUNCE_TEXT",
    "BONZAI_HOOK_VERBOSE",
    "BONZAI_HOOK_LOG",
];

/// Returns a Command configured to run the bonzai-hook binary
pub fn hook_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bonzai-hook"));
    for var in HOOK_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// Returns a `run` command whose linter is `sh -c <script>`.
pub fn run_with_linter(script: &str) -> Command {
    let mut cmd = hook_cmd();
    cmd.args(["run", "--", "sh", "-c", script]);
    cmd
}

/// Temporary project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parent dirs.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join(".claude/settings.local.json")
    }

    /// Parsed harness settings.
    pub fn settings(&self) -> serde_json::Value {
        serde_json::from_str(&self.read(".claude/settings.local.json")).unwrap()
    }
}

/// Wait until `path` exists, for side effects that are not awaited.
pub fn wait_for_file(path: &Path, timeout: Duration) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if path.exists() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    path.exists()
}
