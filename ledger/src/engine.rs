//! The ledger engine: owns state and collaborators, stages and commits transitions.

use civic_interfaces::{DaoFactory, IdentityVerifier};
use civic_types::{Address, CallContext, CivicParams, CountryHash, Day, ProposalHash, Timestamp};
use civic_utils::format_tokens;
use tracing::{debug, info};

use crate::citizen::Citizen;
use crate::dao::CountryDao;
use crate::error::LedgerError;
use crate::event::LedgerEvent;
use crate::proposal::Proposal;
use crate::state::LedgerState;

/// A transition in progress. Discarded on error, swapped in by [`CivicLedger::commit`].
pub(crate) struct Staged {
    pub state: LedgerState,
    pub events: Vec<LedgerEvent>,
}

impl Staged {
    pub fn emit(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }
}

pub struct CivicLedger {
    address: Address,
    gate: Address,
    pub(crate) params: CivicParams,
    pub(crate) identity: Box<dyn IdentityVerifier>,
    pub(crate) factory: Box<dyn DaoFactory>,
    state: LedgerState,
    events: Vec<LedgerEvent>,
}

impl CivicLedger {
    /// Build a ledger at `address`, trusting `gate` for pause and upgrade.
    ///
    /// The proposal watermark starts at the day of `now`.
    pub fn initialize(
        address: Address,
        gate: Address,
        identity: Box<dyn IdentityVerifier>,
        factory: Box<dyn DaoFactory>,
        params: CivicParams,
        now: Timestamp,
    ) -> Result<Self, LedgerError> {
        if address.is_zero() {
            return Err(LedgerError::ZeroAddress("ledger"));
        }
        if gate.is_zero() {
            return Err(LedgerError::ZeroAddress("consensus gate"));
        }
        if identity.address().is_zero() {
            return Err(LedgerError::ZeroAddress("identity verifier"));
        }
        if factory.address().is_zero() {
            return Err(LedgerError::ZeroAddress("DAO factory"));
        }
        params.validate()?;

        info!(
            ledger = %address,
            gate = %gate,
            genesis_day = Day::of(now).index(),
            claimable = %format_tokens(params.claimable_amount),
            "civic ledger initialised"
        );

        Ok(Self {
            address,
            gate,
            params,
            identity,
            factory,
            state: LedgerState::new(Day::of(now), address),
            events: Vec::new(),
        })
    }

    // ── Staging ──────────────────────────────────────────────────────────

    pub(crate) fn stage(&self) -> Staged {
        Staged {
            state: self.state.clone(),
            events: Vec::new(),
        }
    }

    pub(crate) fn commit(&mut self, staged: Staged) {
        for event in &staged.events {
            trace_event(event);
        }
        self.state = staged.state;
        self.events.extend(staged.events);
    }

    pub(crate) fn ensure_not_paused(&self) -> Result<(), LedgerError> {
        if self.state.paused {
            return Err(LedgerError::Paused);
        }
        Ok(())
    }

    pub(crate) fn ensure_gate(&self, ctx: &CallContext) -> Result<(), LedgerError> {
        if ctx.caller != self.gate {
            return Err(LedgerError::NotGate);
        }
        Ok(())
    }

    /// Take every event committed since the last drain.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn pending_events(&self) -> &[LedgerEvent] {
        &self.events
    }

    // ── Persistence ──────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Result<Vec<u8>, LedgerError> {
        self.state.to_bytes()
    }

    pub fn restore_snapshot(&mut self, bytes: &[u8]) -> Result<(), LedgerError> {
        self.state = LedgerState::from_bytes(bytes)?;
        info!(citizens = self.state.citizens.len(), "ledger state restored");
        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn gate_address(&self) -> Address {
        self.gate
    }

    pub fn factory_address(&self) -> Address {
        self.factory.address()
    }

    pub fn identity_address(&self) -> Address {
        self.identity.address()
    }

    pub fn params(&self) -> &CivicParams {
        &self.params
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn implementation(&self) -> Address {
        self.state.implementation
    }

    pub fn version(&self) -> u64 {
        self.state.version
    }

    pub fn current_day(&self, now: Timestamp) -> Day {
        Day::of(now)
    }

    pub fn day_proposal_count(&self, day: Day) -> u64 {
        self.state.proposals.day_count(day)
    }

    pub fn yesterday_proposal_count(&self, now: Timestamp) -> u64 {
        Day::of(now)
            .previous()
            .map_or(0, |d| self.state.proposals.day_count(d))
    }

    pub fn last_proposal_day(&self) -> Day {
        self.state.proposals.last_proposal_day()
    }

    pub fn no_proposal_bonus(&self, day: Day) -> u128 {
        self.state.proposals.no_proposal_bonus(day)
    }

    pub fn voted_today(&self, account: Address, now: Timestamp) -> bool {
        self.state
            .citizens
            .get(&account)
            .is_some_and(|c| c.last_claimed_day == Some(Day::of(now)))
    }

    pub fn citizen(&self, account: Address) -> Citizen {
        self.state.citizen(&account)
    }

    pub fn dao(&self, country_hash: &CountryHash) -> Option<&CountryDao> {
        self.state.daos.get(country_hash)
    }

    pub fn global_dao(&self) -> Option<&CountryDao> {
        self.state.daos.get(&CountryHash::GLOBAL)
    }

    pub fn proposal(&self, day: Day, hash: &ProposalHash) -> Option<&Proposal> {
        self.state.proposals.get(day, hash)
    }

    pub fn proposal_score(&self, hash: &ProposalHash) -> u64 {
        self.state.proposals.score(hash)
    }

    /// Balance of the ledger's own issuance token.
    pub fn balance_of(&self, holder: Address) -> u128 {
        self.state.tokens.balance_of(self.address, holder)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> u128 {
        self.state.tokens.allowance(self.address, owner, spender)
    }

    pub fn total_supply(&self) -> u128 {
        self.state.tokens.total_supply(self.address)
    }

    /// Balance of any token tracked by the ledger, e.g. a country DAO token.
    pub fn token_balance(&self, token: Address, holder: Address) -> u128 {
        self.state.tokens.balance_of(token, holder)
    }
}

fn trace_event(event: &LedgerEvent) {
    match event {
        LedgerEvent::Verified {
            citizen, country, ..
        } => info!(%citizen, country = %country, "identity verified"),
        LedgerEvent::NewCountryOnboarded {
            country, dao, founder, ..
        } => info!(country = %country, %dao, %founder, "new country onboarded"),
        LedgerEvent::CitizenOnboarded {
            citizen,
            bonus,
            verified_count,
            ..
        } => info!(%citizen, bonus = %format_tokens(*bonus), verified_count, "citizen onboarded"),
        LedgerEvent::GlobalCitizenOnboarded {
            citizen,
            verified_count,
            ..
        } => debug!(%citizen, verified_count, "global citizen onboarded"),
        LedgerEvent::ProposingByAddress {
            proposer,
            proposal_hash,
            ..
        } => debug!(%proposer, %proposal_hash, "proposal registered"),
        LedgerEvent::ProposingByCountry { .. } => {}
        LedgerEvent::VotingByAddress {
            voter,
            proposal_hash,
            score,
            ..
        } => debug!(%voter, %proposal_hash, score, "vote cast"),
        LedgerEvent::Claimed {
            account,
            day,
            issued,
            spent,
        } => info!(
            %account,
            day = day.index(),
            issued = %format_tokens(*issued),
            spent = %format_tokens(*spent),
            "daily claim"
        ),
        LedgerEvent::WalletChanged { from, to } => info!(%from, %to, "wallet changed"),
        LedgerEvent::Paused => info!("ledger paused"),
        LedgerEvent::Unpaused => info!("ledger unpaused"),
        LedgerEvent::Upgraded {
            implementation,
            version,
        } => info!(%implementation, version, "ledger upgraded"),
    }
}
