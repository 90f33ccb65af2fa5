// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_hook;
mod cmd_run;

use clap::Parser;

use bonzai_hook::cli::{Cli, Command};
use bonzai_hook::error::ExitCode;
use bonzai_hook::logging;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.run_args().is_some_and(|args| args.verbose));

    let result = match &cli.command {
        Some(Command::Hook(args)) => cmd_hook::run(args),
        Some(Command::Run(args)) => cmd_run::run(args),
        None => cmd_run::run(&cli.run),
    };

    match result {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::InternalError.into()
        }
    }
}
