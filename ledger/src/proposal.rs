//! Daily proposal registry and scores.

use civic_types::{Address, CountryHash, Day, ProposalHash};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::LedgerError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub proposer: Address,
    pub country_hash: CountryHash,
    pub text: String,
}

/// Proposals per day, the day counts, the last-proposal watermark and the
/// accumulated scores.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalBook {
    by_day: HashMap<Day, HashMap<ProposalHash, Proposal>>,
    day_counts: HashMap<Day, u64>,
    last_proposal_day: Day,
    scores: HashMap<ProposalHash, u64>,
}

impl ProposalBook {
    /// Empty registry whose watermark starts at `genesis`.
    pub fn new(genesis: Day) -> Self {
        Self {
            by_day: HashMap::new(),
            day_counts: HashMap::new(),
            last_proposal_day: genesis,
            scores: HashMap::new(),
        }
    }

    pub fn get(&self, day: Day, hash: &ProposalHash) -> Option<&Proposal> {
        self.by_day.get(&day).and_then(|m| m.get(hash))
    }

    pub fn contains(&self, day: Day, hash: &ProposalHash) -> bool {
        self.get(day, hash).is_some()
    }

    pub fn day_count(&self, day: Day) -> u64 {
        self.day_counts.get(&day).copied().unwrap_or(0)
    }

    pub fn last_proposal_day(&self) -> Day {
        self.last_proposal_day
    }

    pub fn score(&self, hash: &ProposalHash) -> u64 {
        self.scores.get(hash).copied().unwrap_or(0)
    }

    /// Register a proposal for `day`. Fails if the same hash already exists that day.
    pub fn register(
        &mut self,
        day: Day,
        hash: ProposalHash,
        proposal: Proposal,
    ) -> Result<(), LedgerError> {
        let entries = self.by_day.entry(day).or_default();
        if entries.contains_key(&hash) {
            return Err(LedgerError::DuplicateProposal);
        }
        let count = self.day_counts.entry(day).or_insert(0);
        *count = count.checked_add(1).ok_or(LedgerError::Overflow)?;
        entries.insert(hash, proposal);
        if day > self.last_proposal_day {
            self.last_proposal_day = day;
        }
        Ok(())
    }

    pub fn add_score(&mut self, hash: ProposalHash, score: u64) -> Result<u64, LedgerError> {
        let total = self.scores.entry(hash).or_insert(0);
        *total = total.checked_add(score).ok_or(LedgerError::Overflow)?;
        Ok(*total)
    }

    /// Issuance multiplier bonus for claims on `day`, see [`no_proposal_bonus`].
    pub fn no_proposal_bonus(&self, day: Day) -> u128 {
        no_proposal_bonus(day, self.last_proposal_day)
    }
}

/// `(day − last − 1)²` once more than one day has passed since the last
/// proposal, otherwise zero.
pub fn no_proposal_bonus(day: Day, last_proposal_day: Day) -> u128 {
    let gap = day.days_since(last_proposal_day);
    if gap <= 1 {
        return 0;
    }
    let idle = u128::from(gap - 1);
    idle.saturating_mul(idle)
}
