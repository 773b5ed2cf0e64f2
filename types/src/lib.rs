//! Fundamental types for the civic ledger.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! account addresses, content hashes, timestamps and day epochs, token units,
//! the call context handed to every entry point, and the tunable parameters.

pub mod address;
pub mod amount;
pub mod context;
pub mod error;
pub mod hash;
pub mod params;
pub mod time;

pub use address::Address;
pub use amount::{tokens, TOKEN_UNIT};
pub use context::CallContext;
pub use error::TypesError;
pub use hash::{CountryHash, ProposalHash, TxHash};
pub use params::CivicParams;
pub use time::{Day, Timestamp, SECS_PER_DAY};
