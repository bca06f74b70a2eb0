// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status line commands.

use printutils::cli::{Cli, Command};
use printutils::discovery;
use printutils::error::{Error, ExitCode};
use printutils::printer::StatusPrinter;

/// Resolve verbosity and print the requested status lines.
pub fn run(cli: &Cli, command: &Command) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let config = discovery::locate(cli.config.as_deref(), &cwd)?
        .load()?
        .with_level(cli.verbose);

    tracing::debug!(verbose = config.is_verbose(), "resolved verbosity");

    let mut printer = StatusPrinter::stdout();
    let written = match command {
        Command::Line => printer.print_line(&config),
        Command::Message(args) => printer.print_message(args.message(), &config),
        Command::NewProcess(args) => printer.print_new_process(args.message(), &config),
        Command::End(args) => printer.print_end(args.message(), &config),
    };
    written.map_err(Error::Output)?;

    Ok(ExitCode::Success)
}
