//! Privileged operations, reachable only through the consensus gate.

use civic_interfaces::{CallTarget, ExternalError};
use civic_types::{Address, CallContext};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::CivicLedger;
use crate::error::LedgerError;
use crate::event::LedgerEvent;

/// Call data the gate forwards to the ledger, bincode-encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminCall {
    Pause,
    Unpause,
    UpgradeTo { implementation: Address },
}

impl AdminCall {
    pub fn encode(&self) -> Result<Vec<u8>, LedgerError> {
        bincode::serialize(self).map_err(|e| LedgerError::Snapshot(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ExternalError> {
        bincode::deserialize(bytes).map_err(|e| ExternalError::Malformed(e.to_string()))
    }
}

impl CivicLedger {
    pub fn pause(&mut self, ctx: &CallContext) -> Result<(), LedgerError> {
        self.ensure_gate(ctx)?;
        if self.is_paused() {
            return Err(LedgerError::AlreadyPaused);
        }
        let mut staged = self.stage();
        staged.state.paused = true;
        staged.emit(LedgerEvent::Paused);
        self.commit(staged);
        Ok(())
    }

    pub fn unpause(&mut self, ctx: &CallContext) -> Result<(), LedgerError> {
        self.ensure_gate(ctx)?;
        if !self.is_paused() {
            return Err(LedgerError::NotPaused);
        }
        let mut staged = self.stage();
        staged.state.paused = false;
        staged.emit(LedgerEvent::Unpaused);
        self.commit(staged);
        Ok(())
    }

    /// Record a new implementation. State carries over unchanged.
    pub fn upgrade_to(&mut self, ctx: &CallContext, implementation: Address) -> Result<(), LedgerError> {
        self.ensure_gate(ctx)?;
        if implementation.is_zero() {
            return Err(LedgerError::ZeroAddress("implementation"));
        }
        let mut staged = self.stage();
        staged.state.implementation = implementation;
        staged.state.version = staged
            .state
            .version
            .checked_add(1)
            .ok_or(LedgerError::Overflow)?;
        let version = staged.state.version;
        staged.emit(LedgerEvent::Upgraded {
            implementation,
            version,
        });
        self.commit(staged);
        Ok(())
    }
}

impl CallTarget for CivicLedger {
    fn address(&self) -> Address {
        CivicLedger::address(self)
    }

    fn dispatch(&mut self, ctx: &CallContext, call_data: &[u8]) -> Result<(), ExternalError> {
        let call = AdminCall::decode(call_data)?;
        let result = match call {
            AdminCall::Pause => self.pause(ctx),
            AdminCall::Unpause => self.unpause(ctx),
            AdminCall::UpgradeTo { implementation } => self.upgrade_to(ctx, implementation),
        };
        result.map_err(|e| {
            warn!(error = %e, "gated call rejected by ledger");
            ExternalError::Rejected(e.to_string())
        })
    }
}
