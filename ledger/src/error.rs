//! Ledger errors.

use civic_interfaces::ExternalError;
use civic_types::Day;
use thiserror::Error;

/// Failure class of a rejected call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authorization,
    Validation,
    State,
    External,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    // ── Authorization ────────────────────────────────────────────────────
    #[error("not authorized to claim on behalf of this account")]
    NotAuthorized,

    #[error("not eligible: not a DAO citizen")]
    NotCitizen,

    #[error("only passport holder")]
    NotPassportHolder,

    #[error("caller is not the consensus gate")]
    NotGate,

    #[error("identity proof is bound to a different account")]
    SubjectMismatch,

    // ── Validation ───────────────────────────────────────────────────────
    #[error("empty proposal")]
    EmptyProposal,

    #[error("proposal too long: {len} bytes, max {max}")]
    ProposalTooLong { len: usize, max: usize },

    #[error("proposal already exists")]
    DuplicateProposal,

    #[error("proposal is not in the daily menu")]
    ProposalNotFound,

    #[error("you cannot vote for yourself")]
    SelfVote,

    #[error("score allocation {score} outside 1..={max}")]
    ScoreExceedsMax { score: u64, max: u64 },

    #[error("proposal voted on twice in one claim")]
    DuplicateVote,

    #[error("not enough balance: vote spend {spent} exceeds daily budget {budget}")]
    InsufficientBalance { spent: u128, budget: u128 },

    #[error("you must spend at least half of your daily balance: spent {spent}, min {min}")]
    SpendTooLow { spent: u128, min: u128 },

    #[error("array lengths inconsistent")]
    ArityMismatch,

    #[error("{0} is the zero address")]
    ZeroAddress(&'static str),

    #[error("target wallet already belongs to a citizen")]
    WalletOccupied,

    #[error(transparent)]
    InvalidParams(#[from] civic_types::TypesError),

    // ── State ────────────────────────────────────────────────────────────
    #[error("not eligible: already claimed on {0}")]
    AlreadyClaimed(Day),

    #[error("can change wallet only before claiming")]
    ClaimedAlready,

    #[error("no vote: yesterday's proposals require at least one vote")]
    VoteRequired,

    #[error("not eligible: expired")]
    Expired,

    #[error("identity proof has expired")]
    ExpiredIdentity,

    #[error("ledger is paused")]
    Paused,

    #[error("ledger is already paused")]
    AlreadyPaused,

    #[error("ledger is not paused")]
    NotPaused,

    #[error("burn of {amount} exceeds balance {balance}")]
    BurnExceedsBalance { amount: u128, balance: u128 },

    #[error("arithmetic overflow in ledger computation")]
    Overflow,

    #[error("snapshot error: {0}")]
    Snapshot(String),

    // ── External ─────────────────────────────────────────────────────────
    #[error("external call failed: {0}")]
    External(#[from] ExternalError),
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        use LedgerError::*;
        match self {
            NotAuthorized | NotCitizen | NotPassportHolder | NotGate | SubjectMismatch => {
                ErrorKind::Authorization
            }
            EmptyProposal
            | ProposalTooLong { .. }
            | DuplicateProposal
            | ProposalNotFound
            | SelfVote
            | ScoreExceedsMax { .. }
            | DuplicateVote
            | InsufficientBalance { .. }
            | SpendTooLow { .. }
            | ArityMismatch
            | ZeroAddress(_)
            | WalletOccupied
            | InvalidParams(_) => ErrorKind::Validation,
            AlreadyClaimed(_) | ClaimedAlready | VoteRequired | Expired | ExpiredIdentity
            | Paused | AlreadyPaused | NotPaused | BurnExceedsBalance { .. } | Overflow
            | Snapshot(_) => ErrorKind::State,
            External(_) => ErrorKind::External,
        }
    }
}
