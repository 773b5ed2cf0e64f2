//! Runtime wiring for the civic ledger.
//!
//! Loads configuration, installs logging, builds the ledger and its consensus
//! gate at genesis, and routes calls between them: onboarding registers new
//! countries with the gate, gated execution dispatches into the ledger.

pub mod config;
pub mod error;
pub mod world;

pub use config::{ParamsConfig, RuntimeConfig};
pub use error::RuntimeError;
pub use world::CivicWorld;
