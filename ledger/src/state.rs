//! Everything the ledger persists.

use civic_types::{Address, CountryHash, Day};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::citizen::Citizen;
use crate::dao::CountryDao;
use crate::error::LedgerError;
use crate::proposal::ProposalBook;
use crate::token::TokenBook;

/// Complete ledger state. Cloned to stage a transition, swapped in on commit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerState {
    pub citizens: HashMap<Address, Citizen>,
    pub daos: HashMap<CountryHash, CountryDao>,
    pub proposals: ProposalBook,
    pub tokens: TokenBook,
    pub paused: bool,
    pub implementation: Address,
    pub version: u64,
}

impl LedgerState {
    pub fn new(genesis: Day, implementation: Address) -> Self {
        Self {
            citizens: HashMap::new(),
            daos: HashMap::new(),
            proposals: ProposalBook::new(genesis),
            tokens: TokenBook::new(),
            paused: false,
            implementation,
            version: 1,
        }
    }

    /// The stored record, or the zero record for unknown addresses.
    pub fn citizen(&self, address: &Address) -> Citizen {
        self.citizens.get(address).cloned().unwrap_or_default()
    }

    /// Number of addresses currently holding a qualified record.
    pub fn qualified_count(&self) -> usize {
        self.citizens.values().filter(|c| c.is_qualified).count()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, LedgerError> {
        bincode::serialize(self).map_err(|e| LedgerError::Snapshot(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LedgerError> {
        bincode::deserialize(bytes).map_err(|e| LedgerError::Snapshot(e.to_string()))
    }
}
