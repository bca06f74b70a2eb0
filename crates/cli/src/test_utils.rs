//! Shared unit test utilities.
//!
//! Provides deterministic clocks and captured printers for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::Cell;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::clock::{Clock, FixedClock};
use crate::printer::StatusPrinter;

/// Timestamp reported by [`fixed_clock`].
pub const FIXED_STAMP: &str = "2024-01-02 03:04:05";

pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap()
}

/// Clock pinned to [`FIXED_STAMP`].
pub fn fixed_clock() -> FixedClock {
    FixedClock(fixed_time())
}

/// Printer that records into a buffer with a pinned clock.
pub fn captured() -> StatusPrinter<FixedClock, Vec<u8>> {
    StatusPrinter::new(fixed_clock(), Vec::new())
}

/// Run `f` against a captured printer and return what it wrote.
pub fn capture<F>(f: F) -> String
where
    F: FnOnce(&mut StatusPrinter<FixedClock, Vec<u8>>),
{
    let mut printer = captured();
    f(&mut printer);
    String::from_utf8(printer.into_inner()).unwrap()
}

/// Clock that moves forward one second every time it is read.
pub struct TickingClock {
    next: Cell<NaiveDateTime>,
}

impl TickingClock {
    pub fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            next: Cell::new(start),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> NaiveDateTime {
        let now = self.next.get();
        self.next.set(now + TimeDelta::seconds(1));
        now
    }
}
