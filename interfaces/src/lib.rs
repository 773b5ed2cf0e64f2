//! Abstract collaborator traits for the civic ledger.
//!
//! The identity-proof verifier, the DAO/token factory, and the consensus gate
//! are reached only through these traits. The ledger and gate crates depend on
//! the traits, never on each other or on a concrete verifier.

pub mod call;
pub mod dao;
pub mod error;
pub mod identity;
pub mod registry;

pub use call::CallTarget;
pub use dao::{DaoFactory, DaoInstance};
pub use error::ExternalError;
pub use identity::{IdentityAttestation, IdentityProof, IdentityVerifier};
pub use registry::CountryRegistry;
