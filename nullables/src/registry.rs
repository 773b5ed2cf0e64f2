//! Nullable country registry: records every country the ledger announces.

use civic_interfaces::{CountryRegistry, ExternalError};
use civic_types::{Address, CallContext};

#[derive(Default)]
pub struct NullCountryRegistry {
    pub added: Vec<(Address, Address)>,
    pub reject: bool,
}

impl NullCountryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that refuses every country.
    pub fn rejecting() -> Self {
        Self {
            added: Vec::new(),
            reject: true,
        }
    }

    pub fn countries(&self) -> Vec<Address> {
        self.added.iter().map(|(_, country)| *country).collect()
    }
}

impl CountryRegistry for NullCountryRegistry {
    fn add_country(&mut self, ctx: &CallContext, country: Address) -> Result<(), ExternalError> {
        if self.reject {
            return Err(ExternalError::Rejected("registry closed".into()));
        }
        self.added.push((ctx.caller, country));
        Ok(())
    }
}
