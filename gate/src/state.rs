//! Persistent gate state.

use civic_types::{Address, TxHash};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::GateError;
use crate::operator::BootstrapOperator;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateState {
    /// Registration order, append-only.
    pub countries: Vec<Address>,
    pub operator: BootstrapOperator,
    pub nonce: u64,
    pub whitelist: HashSet<(TxHash, Address)>,
}

impl GateState {
    pub fn new(operator: BootstrapOperator) -> Self {
        Self {
            countries: Vec::new(),
            operator,
            nonce: 0,
            whitelist: HashSet::new(),
        }
    }

    pub fn is_country(&self, address: &Address) -> bool {
        self.countries.contains(address)
    }

    /// Every registered country approved `tx_hash`. False with no countries.
    pub fn is_unanimous(&self, tx_hash: &TxHash) -> bool {
        !self.countries.is_empty()
            && self
                .countries
                .iter()
                .all(|c| self.whitelist.contains(&(*tx_hash, *c)))
    }

    pub fn approvals(&self, tx_hash: &TxHash) -> usize {
        self.countries
            .iter()
            .filter(|c| self.whitelist.contains(&(*tx_hash, **c)))
            .count()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, GateError> {
        bincode::serialize(self).map_err(|e| GateError::Snapshot(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GateError> {
        bincode::deserialize(bytes).map_err(|e| GateError::Snapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(n: u8) -> TxHash {
        TxHash::new([n; 32])
    }

    #[test]
    fn unanimity_needs_every_country() {
        let mut state = GateState::new(BootstrapOperator::NONE);
        assert!(!state.is_unanimous(&hash(1)));

        let (a, b) = (Address::from_low_u64(1), Address::from_low_u64(2));
        state.countries.extend([a, b]);
        state.whitelist.insert((hash(1), a));
        assert!(!state.is_unanimous(&hash(1)));
        assert_eq!(state.approvals(&hash(1)), 1);

        state.whitelist.insert((hash(1), b));
        assert!(state.is_unanimous(&hash(1)));
        assert!(!state.is_unanimous(&hash(2)));
    }

    #[test]
    fn bytes_roundtrip() {
        let mut state = GateState::new(BootstrapOperator::NONE);
        state.countries.push(Address::from_low_u64(1));
        state.nonce = 7;
        state.whitelist.insert((hash(3), Address::from_low_u64(1)));
        let restored = GateState::from_bytes(&state.to_bytes().unwrap()).unwrap();
        assert_eq!(restored.nonce, 7);
        assert!(restored.is_unanimous(&hash(3)));
    }
}
