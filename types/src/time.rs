//! Timestamps and day epochs.
//!
//! Timestamps are Unix epoch seconds (UTC). The ledger's daily cycle is keyed by
//! `Day = floor(timestamp / 86400)`; the day is always derived, never stored
//! as an independent clock.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub const SECS_PER_DAY: u64 = 86_400;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Current system time. Falls back to the epoch if the clock reads before 1970.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn day(&self) -> Day {
        Day::of(*self)
    }

    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    /// Seconds elapsed since this timestamp (relative to `now`).
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Seconds from `now` until this timestamp, zero once it has passed.
    pub fn remaining_from(&self, now: Timestamp) -> u64 {
        self.0.saturating_sub(now.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Day epoch index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Day(u64);

impl Day {
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    pub fn of(ts: Timestamp) -> Self {
        Self(ts.as_secs() / SECS_PER_DAY)
    }

    pub fn index(&self) -> u64 {
        self.0
    }

    /// The day before, or `None` on day zero.
    pub fn previous(&self) -> Option<Day> {
        self.0.checked_sub(1).map(Self)
    }

    pub fn next(&self) -> Day {
        Self(self.0.saturating_add(1))
    }

    /// Number of whole days from `earlier` to `self`, zero if `earlier` is later.
    pub fn days_since(&self, earlier: Day) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// First second of this day.
    pub fn start(&self) -> Timestamp {
        Timestamp::new(self.0.saturating_mul(SECS_PER_DAY))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}
