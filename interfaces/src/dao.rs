use civic_types::Address;
use serde::{Deserialize, Serialize};

use crate::ExternalError;

/// Token and treasury created for one country (or for the global DAO).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaoInstance {
    pub token: Address,
    pub dao: Address,
}

/// Creates a governance token plus DAO per country on first registration.
pub trait DaoFactory {
    fn address(&self) -> Address;
    fn instantiate(&mut self, country: &str) -> Result<DaoInstance, ExternalError>;
}
