// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `bonzai-hook hook` command implementation.
//!
//! Installs, removes, or reports the Stop hook in the harness settings of
//! the current directory.

use std::path::Path;

use anyhow::Context;

use bonzai_hook::cli::{HookAction, HookArgs};
use bonzai_hook::config::{self, BonzaiConfig};
use bonzai_hook::error::ExitCode;
use bonzai_hook::settings::{self, ClaudeSettings, HOOK_COMMAND};

/// Run the hook command.
pub fn run(args: &HookArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    match args.action {
        HookAction::Install => install(&cwd)?,
        HookAction::Uninstall => uninstall(&cwd)?,
        HookAction::Status => status(&cwd),
    }
    Ok(ExitCode::Allow)
}

fn install(root: &Path) -> anyhow::Result<()> {
    let path = settings::settings_path(root);
    let mut settings = ClaudeSettings::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    let added = settings
        .install_stop_hook(HOOK_COMMAND)
        .with_context(|| format!("refusing to rewrite {}", path.display()))?;
    if !added {
        println!("✓ bonzai-hook already installed\n");
        return Ok(());
    }

    settings
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("✓ Installed bonzai-hook as a Claude Code Stop hook");
    println!("  `{HOOK_COMMAND}` will run after every Claude Code message\n");
    Ok(())
}

fn uninstall(root: &Path) -> anyhow::Result<()> {
    let path = settings::settings_path(root);
    let mut settings = ClaudeSettings::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;

    if !settings.uninstall_stop_hook(HOOK_COMMAND) {
        println!("✓ bonzai-hook not installed\n");
        return Ok(());
    }

    settings
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("✓ Removed bonzai-hook from Claude Code\n");
    Ok(())
}

fn status(root: &Path) {
    let path = settings::settings_path(root);
    let installed = match ClaudeSettings::load(&path) {
        Ok(settings) => settings.has_stop_hook(HOOK_COMMAND),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable settings");
            false
        }
    };
    let project = BonzaiConfig::load(&config::config_path(root));
    let auto_burn = BonzaiConfig::auto_burn_enabled(project.as_ref());

    println!("\n🔥 Bonzai Hook Status\n");
    println!(
        "Config autoBurn: {}",
        if auto_burn { "enabled" } else { "disabled" }
    );
    println!(
        "Claude hook: {}\n",
        if installed { "installed" } else { "not installed" }
    );

    if auto_burn && !installed {
        println!("Run \"bonzai-hook hook install\" to install the hook\n");
    }
}
