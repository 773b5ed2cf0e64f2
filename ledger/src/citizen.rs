//! Citizen records.

use civic_types::{CountryHash, Day, Timestamp};
use serde::{Deserialize, Serialize};

/// A passport holder's record. `Citizen::default()` is the zero record left
/// behind by wallet migration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citizen {
    pub country: String,
    pub country_hash: CountryHash,
    pub revalidate_at: Timestamp,
    pub is_qualified: bool,
    pub last_claimed_day: Option<Day>,
}

impl Citizen {
    pub fn has_claimed_on(&self, day: Day) -> bool {
        self.last_claimed_day.is_some_and(|d| d >= day)
    }

    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.revalidate_at <= now
    }
}
