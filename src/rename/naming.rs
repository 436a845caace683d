//! Target-name generation.
//!
//! Names follow `{year}_{month}_{n}.jpg` with an unpadded month. The
//! allocator owns the counter and the collision set for a single run, so
//! nothing leaks between calls.

use chrono::{Datelike, Local};
use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fmt;
use tracing::trace;

/// Year and month the run is stamped with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthStamp {
    pub year: i32,
    /// 1..=12, never zero-padded in names.
    pub month: u32,
}

impl MonthStamp {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Stamp for the local calendar date right now.
    pub fn today() -> Self {
        let now = Local::now();
        Self::new(now.year(), now.month())
    }

    /// `2024_6_3.jpg` for counter 3 in June 2024.
    pub fn file_name(&self, counter: u64) -> String {
        format!("{}_{}_{}.jpg", self.year, self.month, counter)
    }
}

impl fmt::Display for MonthStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.year, self.month)
    }
}

/// Hands out collision-free names in increasing counter order.
#[derive(Debug)]
pub struct NameAllocator {
    stamp: MonthStamp,
    counter: u64,
    taken: HashSet<OsString>,
}

impl NameAllocator {
    /// `taken` is the full listing of the directory; the counter starts at 1.
    pub fn new(stamp: MonthStamp, taken: HashSet<OsString>) -> Self {
        Self {
            stamp,
            counter: 1,
            taken,
        }
    }

    /// Reserve the next free name.
    ///
    /// Searches upward from the current counter, records the winner as taken and
    /// leaves the counter one past it.
    pub fn next_name(&mut self) -> String {
        let mut skipped = 0u64;
        let name = loop {
            let candidate = self.stamp.file_name(self.counter);
            if !self.contains(OsStr::new(&candidate)) {
                break candidate;
            }
            skipped += 1;
            self.counter += 1;
        };
        if skipped > 0 {
            trace!(name = %name, skipped, "skipped names already in use");
        }
        self.taken.insert(OsString::from(&name));
        self.counter += 1;
        name
    }

    /// True when `name` was in the listing or has already been handed out.
    pub fn contains(&self, name: &OsStr) -> bool {
        self.taken.contains(name)
    }

    /// Counter value the next lookup will start from.
    #[cfg(test)]
    fn counter(&self) -> u64 {
        self.counter
    }
}
