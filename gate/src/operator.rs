//! Bootstrap operator and the authority phase derived from it.

use civic_types::{Address, Timestamp};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapOperator {
    pub address: Address,
    pub expires_at: Timestamp,
}

impl BootstrapOperator {
    /// Renounced: no single-signer path remains.
    pub const NONE: Self = Self {
        address: Address::ZERO,
        expires_at: Timestamp::EPOCH,
    };

    pub fn is_renounced(&self) -> bool {
        self.address.is_zero()
    }

    pub fn is(&self, caller: Address) -> bool {
        !self.is_renounced() && self.address == caller
    }

    pub fn phase(&self, now: Timestamp) -> AuthorityPhase {
        if !self.is_renounced() && now < self.expires_at {
            AuthorityPhase::Bootstrap {
                operator: self.address,
                expires_at: self.expires_at,
            }
        } else {
            AuthorityPhase::Decentralized
        }
    }
}

/// Who may authorise privileged calls right now. A pure function of time and
/// the operator record; there is no stored flag to flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthorityPhase {
    /// The operator executes alone until `expires_at`.
    Bootstrap {
        operator: Address,
        expires_at: Timestamp,
    },
    /// Only unanimous country approval executes.
    Decentralized,
}

impl AuthorityPhase {
    pub fn is_bootstrap(&self) -> bool {
        matches!(self, Self::Bootstrap { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> BootstrapOperator {
        BootstrapOperator {
            address: Address::from_low_u64(5),
            expires_at: Timestamp::new(1_000),
        }
    }

    #[test]
    fn phase_flips_at_expiry() {
        let op = operator();
        assert!(op.phase(Timestamp::new(999)).is_bootstrap());
        assert_eq!(op.phase(Timestamp::new(1_000)), AuthorityPhase::Decentralized);
    }

    #[test]
    fn renounced_operator_is_decentralized() {
        assert_eq!(
            BootstrapOperator::NONE.phase(Timestamp::new(0)),
            AuthorityPhase::Decentralized
        );
        assert!(!BootstrapOperator::NONE.is(Address::ZERO));
    }
}
