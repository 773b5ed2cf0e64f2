//! Proxy administration for upgradeable components.
//!
//! The gate is the owner of a [`ProxyAdmin`]. Upgrading a proxied component,
//! the gate itself included, is a gated call executed against the admin. Only
//! the implementation pointer moves; the component keeps its own state.

use std::collections::BTreeMap;

use civic_interfaces::{CallTarget, ExternalError};
use civic_types::{Address, CallContext};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::GateError;
use crate::event::GateEvent;

/// Call data the gate forwards to a [`ProxyAdmin`], bincode-encoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProxyCall {
    Upgrade { proxy: Address, implementation: Address },
}

impl ProxyCall {
    pub fn encode(&self) -> Result<Vec<u8>, GateError> {
        bincode::serialize(self).map_err(|e| GateError::Encoding(e.to_string()))
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ExternalError> {
        bincode::deserialize(bytes).map_err(|e| ExternalError::Malformed(e.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRecord {
    pub implementation: Address,
    /// Starts at 1, bumped by every upgrade.
    pub version: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProxyAdmin {
    address: Address,
    owner: Address,
    proxies: BTreeMap<Address, ProxyRecord>,
    #[serde(skip)]
    events: Vec<GateEvent>,
}

impl ProxyAdmin {
    pub fn new(address: Address, owner: Address) -> Result<Self, GateError> {
        if address.is_zero() {
            return Err(GateError::ZeroAddress("proxy admin"));
        }
        if owner.is_zero() {
            return Err(GateError::ZeroAddress("proxy owner"));
        }
        Ok(Self {
            address,
            owner,
            proxies: BTreeMap::new(),
            events: Vec::new(),
        })
    }

    /// Put `proxy` under this admin at deployment, pointing at `implementation`.
    pub fn register(&mut self, proxy: Address, implementation: Address) -> Result<(), GateError> {
        if proxy.is_zero() {
            return Err(GateError::ZeroAddress("proxy"));
        }
        if implementation.is_zero() {
            return Err(GateError::ZeroAddress("implementation"));
        }
        if self.proxies.contains_key(&proxy) {
            return Err(GateError::ProxyExists);
        }
        self.proxies.insert(
            proxy,
            ProxyRecord {
                implementation,
                version: 1,
            },
        );
        Ok(())
    }

    /// Point `proxy` at a new implementation. Only the owner may call this.
    pub fn upgrade(
        &mut self,
        ctx: &CallContext,
        proxy: Address,
        implementation: Address,
    ) -> Result<(), GateError> {
        if ctx.caller != self.owner {
            return Err(GateError::NotProxyOwner);
        }
        if implementation.is_zero() {
            return Err(GateError::ZeroAddress("implementation"));
        }
        let record = self.proxies.get_mut(&proxy).ok_or(GateError::UnknownProxy)?;
        let version = record.version.checked_add(1).ok_or(GateError::Overflow)?;
        *record = ProxyRecord {
            implementation,
            version,
        };
        info!(%proxy, %implementation, version, "proxy upgraded");
        self.events.push(GateEvent::ProxyUpgraded {
            proxy,
            implementation,
            version,
        });
        Ok(())
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn record(&self, proxy: Address) -> Option<ProxyRecord> {
        self.proxies.get(&proxy).copied()
    }

    pub fn implementation(&self, proxy: Address) -> Option<Address> {
        self.record(proxy).map(|r| r.implementation)
    }

    pub fn drain_events(&mut self) -> Vec<GateEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Result<Vec<u8>, GateError> {
        bincode::serialize(self).map_err(|e| GateError::Snapshot(e.to_string()))
    }

    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, GateError> {
        bincode::deserialize(bytes).map_err(|e| GateError::Snapshot(e.to_string()))
    }
}

impl CallTarget for ProxyAdmin {
    fn address(&self) -> Address {
        self.address
    }

    fn dispatch(&mut self, ctx: &CallContext, call_data: &[u8]) -> Result<(), ExternalError> {
        let ProxyCall::Upgrade {
            proxy,
            implementation,
        } = ProxyCall::decode(call_data)?;
        self.upgrade(ctx, proxy, implementation).map_err(|e| {
            warn!(error = %e, "gated call rejected by proxy admin");
            ExternalError::Rejected(e.to_string())
        })
    }
}
