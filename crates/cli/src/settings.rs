// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness settings: Stop hook registration.
//!
//! Settings live in `.claude/settings.local.json`. The document is kept as a
//! raw JSON object so keys this tool does not know about survive a rewrite.
//! Stop hooks are stored as `hooks.Stop[*].hooks[*].command`. Key order is
//! kept as written (`serde_json` with `preserve_order`).

use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};

use crate::error::{Error, Result};

/// Directory holding harness settings, relative to the project root.
pub const SETTINGS_DIR: &str = ".claude";

/// Settings file name inside [`SETTINGS_DIR`].
pub const SETTINGS_FILE: &str = "settings.local.json";

/// Command registered as the Stop hook.
pub const HOOK_COMMAND: &str = "bonzai-hook run";

const HOOKS_KEY: &str = "hooks";
const STOP_KEY: &str = "Stop";

/// Path of the settings file for a project root.
pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Parsed harness settings document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClaudeSettings {
    root: Map<String, Value>,
}

impl ClaudeSettings {
    /// Load settings, returning an empty document if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| Error::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        match serde_json::from_str(&content)? {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(Error::InvalidSettings {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Write settings pretty-printed with a trailing newline, creating parent
    /// directories if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut content = serde_json::to_string_pretty(&self.root)?;
        content.push('\n');
        std::fs::write(path, content)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn as_value(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// True if any Stop entry runs `command`.
    pub fn has_stop_hook(&self, command: &str) -> bool {
        self.stop_entries()
            .is_some_and(|entries| entries.iter().any(|entry| entry_runs(entry, command)))
    }

    /// Append a Stop entry running `command`. Returns false if already present.
    ///
    /// A `hooks` value that is not an object, or a `hooks.Stop` value that is
    /// not an array, is left untouched and reported as an error.
    pub fn install_stop_hook(&mut self, command: &str) -> Result<bool> {
        if self.has_stop_hook(command) {
            return Ok(false);
        }

        let hooks = self
            .root
            .entry(HOOKS_KEY)
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or(Error::MalformedSettings { key: HOOKS_KEY })?;
        let stop = hooks
            .entry(STOP_KEY)
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or(Error::MalformedSettings { key: "hooks.Stop" })?;

        stop.push(json!({
            "hooks": [
                { "type": "command", "command": command }
            ]
        }));
        Ok(true)
    }

    /// Remove every Stop entry running `command`, pruning empty containers.
    /// Returns false if nothing was installed.
    pub fn uninstall_stop_hook(&mut self, command: &str) -> bool {
        if !self.has_stop_hook(command) {
            return false;
        }

        let Some(hooks) = self.root.get_mut(HOOKS_KEY).and_then(Value::as_object_mut) else {
            return false;
        };
        if let Some(stop) = hooks.get_mut(STOP_KEY).and_then(Value::as_array_mut) {
            stop.retain(|entry| !entry_runs(entry, command));
            if stop.is_empty() {
                hooks.shift_remove(STOP_KEY);
            }
        }
        if hooks.is_empty() {
            self.root.shift_remove(HOOKS_KEY);
        }
        true
    }

    fn stop_entries(&self) -> Option<&Vec<Value>> {
        self.root
            .get(HOOKS_KEY)?
            .as_object()?
            .get(STOP_KEY)?
            .as_array()
    }
}

fn entry_runs(entry: &Value, command: &str) -> bool {
    entry
        .get("hooks")
        .and_then(Value::as_array)
        .is_some_and(|hooks| {
            hooks
                .iter()
                .any(|hook| hook.get("command").and_then(Value::as_str) == Some(command))
        })
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
