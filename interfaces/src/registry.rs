use civic_types::{Address, CallContext};

use crate::ExternalError;

/// Receives every newly created country DAO as a voting principal.
///
/// Implemented by the consensus gate; the ledger calls it once per new country.
pub trait CountryRegistry {
    fn add_country(&mut self, ctx: &CallContext, country: Address) -> Result<(), ExternalError>;
}
