// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamped status lines, printed only in verbose mode.
//!
//! Every operation checks [`Config::is_verbose`] first and writes nothing
//! when it is off. Lines look like:
//!
//! ```text
//! 2024-05-01 14:03:22 ------------------------------------------------------------------------
//! 2024-05-01 14:03:22 - build complete
//! ```
//!
//! Each line reads the clock on its own, so the lines of a composite call
//! may carry different seconds.

use std::fmt::Display;
use std::io::{self, Stdout, Write};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;

/// Number of dashes in a separator line.
pub const SEPARATOR_WIDTH: usize = 72;

/// Writes status lines to `W`, stamped by `C`.
///
/// Writes are not locked across lines; concurrent writers to the same
/// stream may interleave with a multi-line call.
#[derive(Debug)]
pub struct StatusPrinter<C = SystemClock, W = Stdout> {
    clock: C,
    out: W,
}

impl StatusPrinter {
    /// Printer on the local clock and process stdout.
    pub fn stdout() -> Self {
        Self::new(SystemClock, io::stdout())
    }
}

impl<C: Clock, W: Write> StatusPrinter<C, W> {
    pub fn new(clock: C, out: W) -> Self {
        Self { clock, out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a separator: timestamp, space, then [`SEPARATOR_WIDTH`] dashes.
    pub fn print_line(&mut self, config: &Config) -> io::Result<()> {
        if !config.is_verbose() {
            return Ok(());
        }
        self.write_separator()
    }

    /// Print `<timestamp> - <message>`.
    pub fn print_message(&mut self, message: impl Display, config: &Config) -> io::Result<()> {
        if !config.is_verbose() {
            return Ok(());
        }
        self.write_message(&message)
    }

    /// Open a new section: separator, then the message line.
    pub fn print_new_process(&mut self, message: impl Display, config: &Config) -> io::Result<()> {
        if !config.is_verbose() {
            return Ok(());
        }
        self.write_separator()?;
        self.write_message(&message)
    }

    /// Close a section: separator, message line, separator.
    pub fn print_end(&mut self, message: impl Display, config: &Config) -> io::Result<()> {
        if !config.is_verbose() {
            return Ok(());
        }
        self.write_separator()?;
        self.write_message(&message)?;
        self.write_separator()
    }

    fn write_separator(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {:-<width$}",
            self.clock.timestamp(),
            "",
            width = SEPARATOR_WIDTH
        )
    }

    fn write_message(&mut self, message: &dyn Display) -> io::Result<()> {
        writeln!(self.out, "{} - {}", self.clock.timestamp(), message)
    }
}

/// [`StatusPrinter::print_line`] on stdout.
pub fn print_line(config: &Config) -> io::Result<()> {
    StatusPrinter::stdout().print_line(config)
}

/// [`StatusPrinter::print_message`] on stdout.
pub fn print_message(message: impl Display, config: &Config) -> io::Result<()> {
    StatusPrinter::stdout().print_message(message, config)
}

/// [`StatusPrinter::print_new_process`] on stdout.
pub fn print_new_process(message: impl Display, config: &Config) -> io::Result<()> {
    StatusPrinter::stdout().print_new_process(message, config)
}

/// [`StatusPrinter::print_end`] on stdout.
pub fn print_end(message: impl Display, config: &Config) -> io::Result<()> {
    StatusPrinter::stdout().print_end(message, config)
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
