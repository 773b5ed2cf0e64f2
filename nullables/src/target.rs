//! Nullable call target: records what the gate executes.

use civic_interfaces::{CallTarget, ExternalError};
use civic_types::{Address, CallContext};

pub struct NullCallTarget {
    address: Address,
    pub calls: Vec<(CallContext, Vec<u8>)>,
    pub fail: bool,
}

impl NullCallTarget {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            calls: Vec::new(),
            fail: false,
        }
    }

    /// A target whose every call reverts.
    pub fn failing(address: Address) -> Self {
        Self {
            fail: true,
            ..Self::new(address)
        }
    }
}

impl CallTarget for NullCallTarget {
    fn address(&self) -> Address {
        self.address
    }

    fn dispatch(&mut self, ctx: &CallContext, call_data: &[u8]) -> Result<(), ExternalError> {
        if self.fail {
            return Err(ExternalError::Rejected("target reverted".into()));
        }
        self.calls.push((*ctx, call_data.to_vec()));
        Ok(())
    }
}
