pub mod cli;
pub mod clock;
pub mod config;
pub mod discovery;
pub mod error;
pub mod printer;

pub use cli::{Cli, Command, MessageArgs};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Config, Verbosity};
pub use error::{Error, ExitCode, Result};
pub use printer::{StatusPrinter, print_end, print_line, print_message, print_new_process};

#[cfg(test)]
pub mod test_utils;
