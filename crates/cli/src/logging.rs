// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup. Logs go to stderr; stdout carries only the hook payload.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "BONZAI_HOOK_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "bonzai_hook=debug" } else { "warn" }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let result = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter)
        .try_init();

    if let Err(e) = result {
        eprintln!("warning: logging already initialized: {e}");
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
