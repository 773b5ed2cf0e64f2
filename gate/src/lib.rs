//! The consensus gate.
//!
//! Sole authority allowed to invoke privileged operations on the ledger, on
//! the gate's [`ProxyAdmin`], or on any other target it is handed. A call is
//! authorised either by the bootstrap operator during its window after genesis,
//! or by every registered country whitelisting the call's hash. The hash binds
//! the call data to the gate's nonce. Every execution advances the nonce and
//! clears the whitelist, so an approval is good for at most one execution.

pub mod engine;
pub mod error;
pub mod event;
pub mod operator;
pub mod proxy;
pub mod state;

pub use engine::ConsensusGate;
pub use error::{GateError, GateErrorKind};
pub use event::{Authority, GateEvent};
pub use operator::{AuthorityPhase, BootstrapOperator};
pub use proxy::{ProxyAdmin, ProxyCall, ProxyRecord};
pub use state::GateState;
