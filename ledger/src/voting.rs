//! Vote pricing.

use civic_types::{ProposalHash, TOKEN_UNIT};
use serde::{Deserialize, Serialize};

/// One vote inside a claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteElement {
    pub proposal_hash: ProposalHash,
    pub score: u64,
}

impl VoteElement {
    pub fn new(proposal_hash: ProposalHash, score: u64) -> Self {
        Self {
            proposal_hash,
            score,
        }
    }
}

/// Raw-unit cost of a vote: `score²` tokens within a country, `score³` across.
///
/// `None` on overflow.
pub fn vote_cost(score: u64, same_country: bool) -> Option<u128> {
    let s = u128::from(score);
    let whole = if same_country {
        s.checked_mul(s)?
    } else {
        s.checked_mul(s)?.checked_mul(s)?
    };
    whole.checked_mul(TOKEN_UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_within_country() {
        assert_eq!(vote_cost(8, true), Some(64 * TOKEN_UNIT));
        assert_eq!(vote_cost(9, true), Some(81 * TOKEN_UNIT));
    }

    #[test]
    fn cube_across_countries() {
        assert_eq!(vote_cost(4, false), Some(64 * TOKEN_UNIT));
        assert_eq!(vote_cost(1, false), Some(TOKEN_UNIT));
    }

    #[test]
    fn huge_score_overflows() {
        assert_eq!(vote_cost(u64::MAX, false), None);
    }
}
