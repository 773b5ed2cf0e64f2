//! The civic ledger.
//!
//! Verified citizens register a country affiliation, then once per day claim
//! their issuance. A claim carries one new proposal and, whenever yesterday
//! produced proposals, a set of votes on them priced quadratically (cubically
//! across borders). Country DAOs are created on demand through a factory and
//! pay a decaying onboarding bonus from a fixed pool.
//!
//! Pause and upgrade authority belongs exclusively to the consensus gate.
//! Every mutating entry point is all-or-nothing: it runs against a staged copy
//! of [`LedgerState`] and commits state and events together only on success.

pub mod admin;
pub mod citizen;
pub mod claim;
pub mod dao;
pub mod engine;
pub mod error;
pub mod event;
pub mod onboarding;
pub mod proposal;
pub mod state;
pub mod token;
pub mod voting;
pub mod wallet;

pub use admin::AdminCall;
pub use citizen::Citizen;
pub use claim::{ClaimOutcome, ClaimRequest};
pub use dao::CountryDao;
pub use engine::CivicLedger;
pub use error::{ErrorKind, LedgerError};
pub use event::LedgerEvent;
pub use proposal::{no_proposal_bonus, Proposal, ProposalBook};
pub use state::LedgerState;
pub use token::TokenBook;
pub use voting::{vote_cost, VoteElement};
