//! Nullable clock: deterministic time for testing.

use civic_types::{Address, CallContext, Day, Timestamp, SECS_PER_DAY};
use std::cell::Cell;

/// A deterministic clock for testing.
///
/// Time only advances when you tell it to.
pub struct NullClock {
    current: Cell<u64>,
}

impl NullClock {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            current: Cell::new(initial_secs),
        }
    }

    /// Clock set to the first second of `day`.
    pub fn at_day(day: u64) -> Self {
        Self::new(day * SECS_PER_DAY)
    }

    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.current.get())
    }

    pub fn day(&self) -> Day {
        Day::of(self.now())
    }

    pub fn advance(&self, secs: u64) {
        self.current.set(self.current.get() + secs);
    }

    pub fn advance_days(&self, days: u64) {
        self.advance(days * SECS_PER_DAY);
    }

    pub fn set(&self, secs: u64) {
        self.current.set(secs);
    }

    /// Call context for `caller` at the current time.
    pub fn ctx(&self, caller: Address) -> CallContext {
        CallContext::new(caller, self.now())
    }
}
