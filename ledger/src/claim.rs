//! Daily claims: vote, propose, collect issuance.

use civic_crypto::proposal_hash;
use civic_types::{tokens, Address, CallContext, Day};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::citizen::Citizen;
use crate::engine::{CivicLedger, Staged};
use crate::error::LedgerError;
use crate::event::LedgerEvent;
use crate::proposal::Proposal;
use crate::voting::{vote_cost, VoteElement};

/// One claim inside a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub proposal: String,
    pub votes: Vec<VoteElement>,
    pub on_behalf_of: Address,
}

/// What a committed claim paid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub account: Address,
    pub day: Day,
    /// Raw amount minted, including any no-proposal bonus.
    pub issued: u128,
    /// Raw amount burned for votes.
    pub spent: u128,
}

impl CivicLedger {
    /// Claim today's issuance for `on_behalf_of`.
    ///
    /// The caller is either the account itself or holds mutual allowances with
    /// it of at least the claimable amount.
    pub fn claim(
        &mut self,
        ctx: &CallContext,
        proposal: &str,
        votes: &[VoteElement],
        on_behalf_of: Address,
    ) -> Result<ClaimOutcome, LedgerError> {
        self.ensure_not_paused()?;
        let mut staged = self.stage();
        let outcome = self.apply_claim(&mut staged, ctx, proposal, votes, on_behalf_of)?;
        self.commit(staged);
        Ok(outcome)
    }

    /// Run several claims as one unit. The first failure aborts the batch and
    /// nothing is committed.
    pub fn claim_batch(
        &mut self,
        ctx: &CallContext,
        proposals: &[String],
        votes: &[Vec<VoteElement>],
        accounts: &[Address],
    ) -> Result<Vec<ClaimOutcome>, LedgerError> {
        if proposals.is_empty() || proposals.len() != votes.len() || votes.len() != accounts.len()
        {
            return Err(LedgerError::ArityMismatch);
        }
        self.ensure_not_paused()?;

        let mut staged = self.stage();
        let mut outcomes = Vec::with_capacity(accounts.len());
        for ((proposal, votes), account) in proposals.iter().zip(votes).zip(accounts) {
            outcomes.push(self.apply_claim(&mut staged, ctx, proposal, votes, *account)?);
        }
        self.commit(staged);
        Ok(outcomes)
    }

    /// Convenience over [`claim_batch`](Self::claim_batch) for structured requests.
    pub fn claim_requests(
        &mut self,
        ctx: &CallContext,
        requests: &[ClaimRequest],
    ) -> Result<Vec<ClaimOutcome>, LedgerError> {
        let proposals: Vec<String> = requests.iter().map(|r| r.proposal.clone()).collect();
        let votes: Vec<Vec<VoteElement>> = requests.iter().map(|r| r.votes.clone()).collect();
        let accounts: Vec<Address> = requests.iter().map(|r| r.on_behalf_of).collect();
        self.claim_batch(ctx, &proposals, &votes, &accounts)
    }

    fn apply_claim(
        &self,
        staged: &mut Staged,
        ctx: &CallContext,
        proposal: &str,
        votes: &[VoteElement],
        account: Address,
    ) -> Result<ClaimOutcome, LedgerError> {
        let params = self.params();
        let ledger_token = self.address();
        let today = ctx.day();

        if ctx.caller != account {
            let need = params.claimable_amount;
            let book = &staged.state.tokens;
            if book.allowance(ledger_token, account, ctx.caller) < need
                || book.allowance(ledger_token, ctx.caller, account) < need
            {
                return Err(LedgerError::NotAuthorized);
            }
        }

        let mut citizen = staged.state.citizen(&account);
        if !citizen.is_qualified || !staged.state.daos.contains_key(&citizen.country_hash) {
            return Err(LedgerError::NotCitizen);
        }
        if citizen.is_expired_at(ctx.now) {
            return Err(LedgerError::Expired);
        }
        if citizen.has_claimed_on(today) {
            return Err(LedgerError::AlreadyClaimed(today));
        }

        // Read before this claim's own proposal moves the watermark.
        let bonus = staged.state.proposals.no_proposal_bonus(today);

        let spent = self.apply_votes(staged, account, &citizen, today, votes)?;
        self.apply_proposal(staged, account, &citizen, today, proposal)?;

        let issued = bonus
            .checked_add(1)
            .and_then(|m| m.checked_mul(params.claimable_amount))
            .ok_or(LedgerError::Overflow)?;
        staged.state.tokens.mint(ledger_token, account, issued)?;
        staged.state.tokens.burn(ledger_token, account, spent)?;

        citizen.last_claimed_day = Some(today);
        staged.state.citizens.insert(account, citizen);
        staged.emit(LedgerEvent::Claimed {
            account,
            day: today,
            issued,
            spent,
        });

        Ok(ClaimOutcome {
            account,
            day: today,
            issued,
            spent,
        })
    }

    /// Validate and apply votes on yesterday's proposals. Returns the raw spend.
    fn apply_votes(
        &self,
        staged: &mut Staged,
        voter: Address,
        citizen: &Citizen,
        today: Day,
        votes: &[VoteElement],
    ) -> Result<u128, LedgerError> {
        let Some(yesterday) = today.previous() else {
            return Ok(0);
        };
        if staged.state.proposals.day_count(yesterday) == 0 {
            return Ok(0);
        }
        if votes.is_empty() {
            return Err(LedgerError::VoteRequired);
        }

        let params = self.params();
        let budget = params.claimable_amount;
        let mut seen = HashSet::with_capacity(votes.len());
        let mut spent: u128 = 0;

        for vote in votes {
            let target = staged
                .state
                .proposals
                .get(yesterday, &vote.proposal_hash)
                .cloned()
                .ok_or(LedgerError::ProposalNotFound)?;
            if target.proposer == voter {
                return Err(LedgerError::SelfVote);
            }
            if vote.score == 0 || vote.score > params.max_vote_score {
                return Err(LedgerError::ScoreExceedsMax {
                    score: vote.score,
                    max: params.max_vote_score,
                });
            }
            if !seen.insert(vote.proposal_hash) {
                return Err(LedgerError::DuplicateVote);
            }

            let same_country = target.country_hash == citizen.country_hash;
            let cost = vote_cost(vote.score, same_country).ok_or(LedgerError::Overflow)?;
            spent = spent.checked_add(cost).ok_or(LedgerError::Overflow)?;
            if spent > budget {
                return Err(LedgerError::InsufficientBalance { spent, budget });
            }

            staged
                .state
                .proposals
                .add_score(vote.proposal_hash, vote.score)?;

            if !same_country {
                // The reward travels with the vote, paid out of the voter's country pool.
                if let Some(dao) = staged.state.daos.get_mut(&citizen.country_hash) {
                    let paid = dao.draw(tokens(u128::from(vote.score)));
                    let token = dao.token;
                    staged.state.tokens.mint(token, target.proposer, paid)?;
                }
            }

            staged.emit(LedgerEvent::VotingByAddress {
                voter,
                day: today,
                proposal_hash: vote.proposal_hash,
                voter_country: citizen.country_hash,
                proposer_country: target.country_hash,
                score: vote.score,
            });
        }

        let min = params.min_vote_spend();
        if spent < min {
            return Err(LedgerError::SpendTooLow { spent, min });
        }
        Ok(spent)
    }

    fn apply_proposal(
        &self,
        staged: &mut Staged,
        proposer: Address,
        citizen: &Citizen,
        today: Day,
        text: &str,
    ) -> Result<(), LedgerError> {
        if text.is_empty() {
            return Err(LedgerError::EmptyProposal);
        }
        let max = self.params().max_proposal_len;
        if text.len() > max {
            return Err(LedgerError::ProposalTooLong {
                len: text.len(),
                max,
            });
        }

        let hash = proposal_hash(text);
        staged.state.proposals.register(
            today,
            hash,
            Proposal {
                proposer,
                country_hash: citizen.country_hash,
                text: text.to_string(),
            },
        )?;
        staged.emit(LedgerEvent::ProposingByAddress {
            proposer,
            day: today,
            proposal_hash: hash,
            text: text.to_string(),
        });
        staged.emit(LedgerEvent::ProposingByCountry {
            country_hash: citizen.country_hash,
            day: today,
            proposal_hash: hash,
        });
        Ok(())
    }
}
