// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `bonzai-hook run` command implementation.

use bonzai_hook::announce::CommandAnnouncer;
use bonzai_hook::cli::RunArgs;
use bonzai_hook::error::ExitCode;
use bonzai_hook::reporter::Reporter;

/// Run the linter and report to the harness.
pub fn run(args: &RunArgs) -> anyhow::Result<ExitCode> {
    let options = args.options()?;
    let announcer = CommandAnnouncer::new(&args.announce_program);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let code = Reporter::new(&options, &announcer).run(&mut handle)?;
    Ok(code)
}
