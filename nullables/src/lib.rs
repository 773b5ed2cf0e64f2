//! Nullable infrastructure for deterministic testing.
//!
//! Every external collaborator of the ledger and gate (clock, identity
//! verifier, DAO factory, country registry, call target) has a test-friendly
//! implementation here that:
//! - Returns deterministic values
//! - Can be controlled programmatically
//! - Keeps a shared handle, so a test can inspect a double after moving a
//!   clone of it into the ledger
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod factory;
pub mod identity;
pub mod registry;
pub mod target;

pub use clock::NullClock;
pub use factory::NullDaoFactory;
pub use identity::NullIdentityVerifier;
pub use registry::NullCountryRegistry;
pub use target::NullCallTarget;
