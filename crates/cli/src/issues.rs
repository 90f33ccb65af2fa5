// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue extraction from linter output.
//!
//! Every non-blank line of the linter's stdout is one issue. No further
//! structure is assumed.

/// Split captured linter output into trimmed, non-empty lines.
///
/// Order is preserved. Lines are split on `\n` only; a trailing `\r` is
/// removed by the per-line trim.
pub fn parse_issues(stdout: &str) -> Vec<String> {
    stdout
        .trim_matches(is_blank)
        .split('\n')
        .map(|line| line.trim_matches(is_blank))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Unicode whitespace plus the ASCII information separators (U+001C..=U+001F),
/// which linters sometimes emit as field delimiters.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;
