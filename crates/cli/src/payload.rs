// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking response payload written to stdout for the harness.

use serde::{Deserialize, Serialize};

/// First line of every stop reason.
pub const BANNER: &str = "⚠️ BONZAI BURN FOUND ISSUES:";

/// Prefix for each issue line in the stop reason.
pub const BULLET: &str = "• ";

/// Stop hook response telling the harness to keep the agent running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResponse {
    /// Always `false` on the blocking path.
    #[serde(rename = "continue")]
    pub should_continue: bool,

    /// Banner followed by one bulleted line per issue.
    pub stop_reason: String,
}

impl HookResponse {
    /// Build the blocking response for a set of issues.
    pub fn block(issues: &[String]) -> Self {
        Self {
            should_continue: false,
            stop_reason: format_stop_reason(issues),
        }
    }

    /// Serialize as a single-line JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Format the banner and bulleted issue lines.
pub fn format_stop_reason(issues: &[String]) -> String {
    let mut reason = String::from(BANNER);
    for issue in issues {
        reason.push('\n');
        reason.push_str(BULLET);
        reason.push_str(issue);
    }
    reason
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
