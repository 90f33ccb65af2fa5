// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration from `bonzai/config.json`.
//!
//! Only the `autoBurn` section is read. Everything else in the file belongs
//! to the linter and is ignored here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Directory holding the project config, relative to the project root.
pub const CONFIG_DIR: &str = "bonzai";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// Path of the project config for a project root.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Project configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonzaiConfig {
    #[serde(default)]
    pub auto_burn: AutoBurnConfig,
}

/// Whether the linter should run automatically after each agent turn.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AutoBurnConfig {
    #[serde(default)]
    pub enabled: bool,
}

impl BonzaiConfig {
    /// Load the project config. Returns `None` if the file is missing or
    /// cannot be parsed.
    pub fn load(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config");
                None
            }
        }
    }

    pub fn auto_burn_enabled(config: Option<&Self>) -> bool {
        config.is_some_and(|c| c.auto_burn.enabled)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
