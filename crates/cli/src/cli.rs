// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Timestamped status lines for scripts, printed only when verbose
#[derive(Parser)]
#[command(name = "printutils")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PRINTUTILS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbosity level; only 1 prints (overrides the config file)
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        env = "PRINTUTILS_VERBOSE",
        value_name = "LEVEL",
        allow_negative_numbers = true
    )]
    pub verbose: Option<i64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a separator line
    Line,
    /// Print a timestamped message
    Message(MessageArgs),
    /// Print a separator followed by a message
    NewProcess(MessageArgs),
    /// Print a message framed by separators
    End(MessageArgs),
}

#[derive(clap::Args)]
pub struct MessageArgs {
    /// Message text (words are joined with spaces)
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,
}

impl MessageArgs {
    pub fn message(&self) -> String {
        self.text.join(" ")
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
