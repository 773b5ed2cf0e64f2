//! Country DAO records.
//!
//! One table keyed by [`CountryHash`](civic_types::CountryHash) holds every
//! country DAO and, under `CountryHash::GLOBAL`, the universal DAO.

use civic_interfaces::DaoInstance;
use civic_types::Address;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDao {
    pub token: Address,
    pub dao: Address,
    /// Remaining onboarding/reward pool, in raw units of `token`.
    pub bonus_base: u128,
    pub verified_count: u64,
}

impl CountryDao {
    /// A freshly instantiated DAO with its founding citizen already counted.
    pub fn founded(instance: DaoInstance, pool: u128) -> Self {
        Self {
            token: instance.token,
            dao: instance.dao,
            bonus_base: pool,
            verified_count: 1,
        }
    }

    /// Count one more citizen and take their onboarding bonus out of the pool.
    ///
    /// The bonus is `max(1, bonus_base / verified_count)`, so later citizens
    /// receive less and the pool is never drained below zero.
    pub fn admit(&mut self) -> Result<u128, LedgerError> {
        self.verified_count = self
            .verified_count
            .checked_add(1)
            .ok_or(LedgerError::Overflow)?;
        let bonus = (self.bonus_base / u128::from(self.verified_count)).max(1);
        self.bonus_base = self.bonus_base.saturating_sub(bonus);
        Ok(bonus)
    }

    /// Take up to `amount` from the pool, returning what was actually taken.
    pub fn draw(&mut self, amount: u128) -> u128 {
        let taken = amount.min(self.bonus_base);
        self.bonus_base -= taken;
        taken
    }
}
