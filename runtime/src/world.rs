//! The ledger and its gate, wired together.

use std::fs;
use std::path::Path;

use civic_gate::{ConsensusGate, ProxyAdmin, ProxyCall};
use civic_interfaces::{DaoFactory, IdentityProof, IdentityVerifier};
use civic_ledger::{AdminCall, CivicLedger, ClaimOutcome, ClaimRequest, VoteElement};
use civic_types::{Address, CallContext, Timestamp, TxHash};
use tracing::info;

use crate::{RuntimeConfig, RuntimeError};

const LEDGER_SNAPSHOT: &str = "ledger.bin";
const GATE_SNAPSHOT: &str = "gate.bin";
const PROXY_SNAPSHOT: &str = "proxy.bin";

/// A deployed ledger, the consensus gate that governs it, and the proxy admin
/// through which the gate upgrades itself.
///
/// Onboarding registers each new country DAO with the gate; gated execution
/// dispatches into the ledger or the proxy admin with the gate as caller.
pub struct CivicWorld {
    pub ledger: CivicLedger,
    pub gate: ConsensusGate,
    pub proxy_admin: ProxyAdmin,
}

impl CivicWorld {
    /// Deploy both halves from `config` at time `now`.
    pub fn genesis(
        config: &RuntimeConfig,
        identity: Box<dyn IdentityVerifier>,
        factory: Box<dyn DaoFactory>,
        now: Timestamp,
    ) -> Result<Self, RuntimeError> {
        let params = config.civic_params()?;
        let gate = ConsensusGate::initialize(
            config.gate_address,
            config.ledger_address,
            config.initial_operator,
            &params,
            now,
        )?;
        let ledger = CivicLedger::initialize(
            config.ledger_address,
            config.gate_address,
            identity,
            factory,
            params,
            now,
        )?;
        let mut proxy_admin = ProxyAdmin::new(config.proxy_admin_address, config.gate_address)?;
        proxy_admin.register(config.gate_address, config.gate_implementation)?;
        Ok(Self {
            ledger,
            gate,
            proxy_admin,
        })
    }

    // ── Citizen operations ───────────────────────────────────────────────

    pub fn verify_identity(&mut self, ctx: &CallContext, proof: &IdentityProof) -> Result<(), RuntimeError> {
        self.ledger.verify_identity(ctx, proof, &mut self.gate)?;
        Ok(())
    }

    pub fn claim(
        &mut self,
        ctx: &CallContext,
        proposal: &str,
        votes: &[VoteElement],
        on_behalf_of: Address,
    ) -> Result<ClaimOutcome, RuntimeError> {
        Ok(self.ledger.claim(ctx, proposal, votes, on_behalf_of)?)
    }

    pub fn claim_batch(
        &mut self,
        ctx: &CallContext,
        requests: &[ClaimRequest],
    ) -> Result<Vec<ClaimOutcome>, RuntimeError> {
        Ok(self.ledger.claim_requests(ctx, requests)?)
    }

    pub fn change_wallet(&mut self, ctx: &CallContext, new_wallet: Address) -> Result<(), RuntimeError> {
        Ok(self.ledger.change_wallet(ctx, new_wallet)?)
    }

    pub fn approve(&mut self, ctx: &CallContext, spender: Address, amount: u128) -> Result<(), RuntimeError> {
        Ok(self.ledger.approve(ctx, spender, amount)?)
    }

    // ── Governance ───────────────────────────────────────────────────────

    /// Hash the gate expects countries to whitelist for `call` at the current nonce.
    pub fn pending_tx_hash(&self, call: &AdminCall) -> Result<TxHash, RuntimeError> {
        Ok(self.gate.pending_tx_hash(&call.encode()?))
    }

    pub fn whitelist(&mut self, ctx: &CallContext, tx_hash: TxHash) -> Result<(), RuntimeError> {
        Ok(self.gate.whitelist_tx(ctx, tx_hash)?)
    }

    pub fn revoke(&mut self, ctx: &CallContext, tx_hash: TxHash) -> Result<(), RuntimeError> {
        Ok(self.gate.revoke_tx(ctx, tx_hash)?)
    }

    /// Run `call` through the gate against the ledger.
    pub fn execute(&mut self, ctx: &CallContext, call: &AdminCall) -> Result<TxHash, RuntimeError> {
        let call_data = call.encode()?;
        Ok(self.gate.execute(ctx, &call_data, &mut self.ledger)?)
    }

    /// Hash the gate expects for `call` against the proxy admin.
    pub fn pending_proxy_tx_hash(&self, call: &ProxyCall) -> Result<TxHash, RuntimeError> {
        Ok(self.gate.pending_tx_hash(&call.encode()?))
    }

    /// Run `call` through the gate against the proxy admin.
    pub fn execute_proxy(
        &mut self,
        ctx: &CallContext,
        call: &ProxyCall,
    ) -> Result<TxHash, RuntimeError> {
        let call_data = call.encode()?;
        Ok(self.gate.execute(ctx, &call_data, &mut self.proxy_admin)?)
    }

    /// Implementation the gate proxy currently points at.
    pub fn gate_implementation(&self) -> Option<Address> {
        self.proxy_admin.implementation(self.gate.address())
    }

    pub fn transfer_initial_operator(
        &mut self,
        ctx: &CallContext,
        new_operator: Address,
    ) -> Result<(), RuntimeError> {
        Ok(self.gate.transfer_initial_operator(ctx, new_operator)?)
    }

    pub fn renounce_initial_operator(&mut self, ctx: &CallContext) -> Result<(), RuntimeError> {
        Ok(self.gate.renounce_initial_operator(ctx)?)
    }

    // ── Persistence ──────────────────────────────────────────────────────

    /// Write every snapshot into `dir`, creating it if needed.
    pub fn save(&self, dir: &Path) -> Result<(), RuntimeError> {
        fs::create_dir_all(dir)?;
        fs::write(dir.join(LEDGER_SNAPSHOT), self.ledger.snapshot()?)?;
        fs::write(dir.join(GATE_SNAPSHOT), self.gate.snapshot()?)?;
        fs::write(dir.join(PROXY_SNAPSHOT), self.proxy_admin.snapshot()?)?;
        info!(dir = %dir.display(), "world snapshot saved");
        Ok(())
    }

    /// Replace in-memory state with the snapshots in `dir`.
    ///
    /// Either every part is restored or none is.
    pub fn load(&mut self, dir: &Path) -> Result<(), RuntimeError> {
        let ledger_bytes = fs::read(dir.join(LEDGER_SNAPSHOT))?;
        let gate_bytes = fs::read(dir.join(GATE_SNAPSHOT))?;
        let proxy_admin = ProxyAdmin::from_snapshot(&fs::read(dir.join(PROXY_SNAPSHOT))?)?;

        let previous_gate = self.gate.snapshot()?;
        self.gate.restore_snapshot(&gate_bytes)?;
        if let Err(e) = self.ledger.restore_snapshot(&ledger_bytes) {
            self.gate.restore_snapshot(&previous_gate)?;
            return Err(e.into());
        }
        self.proxy_admin = proxy_admin;
        info!(dir = %dir.display(), nonce = self.gate.nonce(), "world snapshot loaded");
        Ok(())
    }
}
