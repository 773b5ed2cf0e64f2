//! Ledger and gate parameters.
//!
//! Every value has a production default; a host may override them through
//! configuration, for example to shrink the pools in a test deployment.

use crate::amount::TOKEN_UNIT;
use crate::error::TypesError;
use crate::time::SECS_PER_DAY;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CivicParams {
    // ── Daily claim ──────────────────────────────────────────────────────
    /// Daily issuance per citizen (raw). Also the vote budget: spend must land
    /// within `[claimable / 2, claimable]` whenever yesterday had proposals.
    pub claimable_amount: u128,

    /// Highest score a single vote element may carry.
    pub max_vote_score: u64,

    /// Longest proposal text accepted, in bytes.
    pub max_proposal_len: usize,

    // ── Onboarding economics ─────────────────────────────────────────────
    /// Bonus pool seeded into each new country DAO (raw, country token).
    pub country_issuance_pool: u128,

    /// Bonus pool seeded into the global DAO (raw, global token).
    pub global_issuance_pool: u128,

    // ── Consensus gate ───────────────────────────────────────────────────
    /// How long the bootstrap operator may execute alone after genesis.
    pub operator_window_secs: u64,
}

impl CivicParams {
    /// Production configuration.
    pub fn civic_defaults() -> Self {
        Self {
            claimable_amount: 64 * TOKEN_UNIT,
            max_vote_score: 12,
            max_proposal_len: 1337,
            country_issuance_pool: 10_000 * TOKEN_UNIT,
            global_issuance_pool: 1_337_000 * TOKEN_UNIT,
            operator_window_secs: 365 * SECS_PER_DAY,
        }
    }

    /// Smallest total vote spend accepted in a claim.
    pub fn min_vote_spend(&self) -> u128 {
        self.claimable_amount / 2
    }

    pub fn validate(&self) -> Result<(), TypesError> {
        if self.claimable_amount == 0 {
            return Err(TypesError::InvalidParams("claimable_amount must be positive".into()));
        }
        if self.max_vote_score == 0 {
            return Err(TypesError::InvalidParams("max_vote_score must be positive".into()));
        }
        if self.max_proposal_len == 0 {
            return Err(TypesError::InvalidParams("max_proposal_len must be positive".into()));
        }
        Ok(())
    }
}

impl Default for CivicParams {
    fn default() -> Self {
        Self::civic_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_defaults() {
        let p = CivicParams::default();
        assert_eq!(p.claimable_amount, 64 * TOKEN_UNIT);
        assert_eq!(p.min_vote_spend(), 32 * TOKEN_UNIT);
        assert_eq!(p.max_proposal_len, 1337);
        assert_eq!(p.global_issuance_pool, 1_337_000 * TOKEN_UNIT);
        assert_eq!(p.operator_window_secs, 31_536_000);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn zero_score_cap_rejected() {
        let p = CivicParams {
            max_vote_score: 0,
            ..CivicParams::default()
        };
        assert!(matches!(p.validate(), Err(TypesError::InvalidParams(_))));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let p: CivicParams = toml::from_str("max_vote_score = 8").unwrap();
        assert_eq!(p.max_vote_score, 8);
        assert_eq!(p.max_proposal_len, 1337);
    }
}
