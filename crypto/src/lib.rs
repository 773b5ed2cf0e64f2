//! Hashing primitives for the civic ledger.
//!
//! Everything is Blake2b-256:
//! - proposal identity (`hash(text)`), unique per day
//! - country keys (`hash(name)`) for the DAO table
//! - gated transaction ids (`hash(call_data ‖ nonce)`) for replay protection

pub mod hash;

pub use hash::{blake2b_256, blake2b_256_multi, call_hash, country_hash, proposal_hash};
