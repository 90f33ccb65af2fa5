//! CLI argument parsing with clap derive.

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::announce;
use crate::error::Result;
use crate::linter::Invocation;
use crate::reporter::ReporterOptions;

/// Stop hook that blocks the agent while the Bonzai linter reports issues
#[derive(Parser)]
#[command(name = "bonzai-hook")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Options for `run` when no subcommand is given.
    #[command(flatten)]
    pub run: RunArgs,
}

impl Cli {
    /// Arguments for the reporter, whether given via `run` or at top level.
    pub fn run_args(&self) -> Option<&RunArgs> {
        match &self.command {
            None => Some(&self.run),
            Some(Command::Run(args)) => Some(args),
            Some(Command::Hook(_)) => None,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the linter and report issues to the harness (default)
    Run(RunArgs),
    /// Manage the Stop hook in .claude/settings.local.json
    Hook(HookArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct RunArgs {
    /// Announce when no issues are found
    #[arg(
        long,
        env = "BONZAI_HOOK_ANNOUNCE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub announce: bool,

    /// Program used for the announcement
    #[arg(
        long,
        env = "BONZAI_HOOK_ANNOUNCE_PROGRAM",
        default_value = announce::DEFAULT_PROGRAM,
        value_name = "PROGRAM"
    )]
    pub announce_program: String,

    /// Text passed to the announcement program
    #[arg(
        long,
        env = "BONZAI_HOOK_ANNOUNCE_TEXT",
        default_value = announce::DEFAULT_TEXT,
        value_name = "TEXT"
    )]
    pub announce_text: String,

    /// Echo raw linter output to stderr
    #[arg(
        short,
        long,
        env = "BONZAI_HOOK_VERBOSE",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub verbose: bool,

    /// Linter command to run (default: npx bonzai-burn -b)
    #[arg(last = true, value_name = "COMMAND")]
    pub linter: Vec<String>,
}

impl RunArgs {
    /// Build reporter options, falling back to the default linter command.
    pub fn options(&self) -> Result<ReporterOptions> {
        let command = if self.linter.is_empty() {
            Invocation::default()
        } else {
            Invocation::new(self.linter.iter().cloned())?
        };
        Ok(ReporterOptions {
            command,
            announce_on_success: self.announce,
            announce_text: self.announce_text.clone(),
            verbose: self.verbose,
        })
    }
}

#[derive(clap::Args)]
pub struct HookArgs {
    /// Action to perform: install (-i), uninstall (remove, -u), status (-s).
    /// Anything else installs.
    #[arg(
        default_value = "install",
        allow_hyphen_values = true,
        value_parser = parse_hook_action,
        value_name = "ACTION"
    )]
    pub action: HookAction,
}

/// Unrecognized actions fall back to install.
fn parse_hook_action(s: &str) -> std::result::Result<HookAction, std::convert::Infallible> {
    Ok(HookAction::from_str(s, true).unwrap_or(HookAction::Install))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum HookAction {
    /// Add the Stop hook
    #[value(alias = "-i")]
    Install,
    /// Remove the Stop hook
    #[value(aliases = ["remove", "-u"])]
    Uninstall,
    /// Show hook and autoBurn status
    #[value(alias = "-s")]
    Status,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
