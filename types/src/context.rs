//! Caller identity and wall-clock time, handed explicitly to every entry point.

use crate::address::Address;
use crate::time::{Day, Timestamp};

/// Who is calling and when.
///
/// The ledger and gate never read a clock of their own; the host decides the
/// current time, which keeps every transition deterministic and replayable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallContext {
    pub caller: Address,
    pub now: Timestamp,
}

impl CallContext {
    pub fn new(caller: Address, now: Timestamp) -> Self {
        Self { caller, now }
    }

    pub fn day(&self) -> Day {
        Day::of(self.now)
    }

    /// Same moment, different caller. Used when the gate forwards a call.
    pub fn with_caller(&self, caller: Address) -> Self {
        Self { caller, now: self.now }
    }
}
