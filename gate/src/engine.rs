//! The gate engine.

use civic_crypto::call_hash;
use civic_interfaces::{CallTarget, CountryRegistry, ExternalError};
use civic_types::{Address, CallContext, CivicParams, Timestamp, TxHash};
use civic_utils::format_duration;
use tracing::{debug, info, warn};

use crate::error::GateError;
use crate::event::{Authority, GateEvent};
use crate::operator::{AuthorityPhase, BootstrapOperator};
use crate::state::GateState;

pub struct ConsensusGate {
    address: Address,
    ledger: Address,
    state: GateState,
    events: Vec<GateEvent>,
}

impl ConsensusGate {
    /// Build the gate guarding `ledger`. The operator may act alone for
    /// `params.operator_window_secs` after `now`.
    pub fn initialize(
        address: Address,
        ledger: Address,
        initial_operator: Address,
        params: &CivicParams,
        now: Timestamp,
    ) -> Result<Self, GateError> {
        if address.is_zero() {
            return Err(GateError::ZeroAddress("gate"));
        }
        if ledger.is_zero() {
            return Err(GateError::ZeroAddress("ledger"));
        }
        if initial_operator.is_zero() {
            return Err(GateError::ZeroAddress("initial operator"));
        }

        let operator = BootstrapOperator {
            address: initial_operator,
            expires_at: now.plus_secs(params.operator_window_secs),
        };
        info!(
            gate = %address,
            %ledger,
            operator = %initial_operator,
            window = %format_duration(params.operator_window_secs),
            "consensus gate initialised"
        );

        Ok(Self {
            address,
            ledger,
            state: GateState::new(operator),
            events: Vec::new(),
        })
    }

    // ── Countries ────────────────────────────────────────────────────────

    /// Register a country principal. Only the ledger may call this.
    pub fn add_country(&mut self, ctx: &CallContext, country: Address) -> Result<(), GateError> {
        if ctx.caller != self.ledger {
            return Err(GateError::NotLedger);
        }
        if country.is_zero() {
            return Err(GateError::ZeroAddress("country"));
        }
        if self.state.is_country(&country) {
            return Err(GateError::CountryExists);
        }
        self.state.countries.push(country);
        info!(%country, total = self.state.countries.len(), "country added to gate");
        self.events.push(GateEvent::CountryAdded { country });
        Ok(())
    }

    // ── Whitelist ────────────────────────────────────────────────────────

    pub fn whitelist_tx(&mut self, ctx: &CallContext, tx_hash: TxHash) -> Result<(), GateError> {
        let country = self.ensure_country(ctx)?;
        if !self.state.whitelist.insert((tx_hash, country)) {
            return Err(GateError::AlreadyWhitelisted);
        }
        debug!(
            %tx_hash,
            %country,
            approvals = self.state.approvals(&tx_hash),
            of = self.state.countries.len(),
            "tx whitelisted"
        );
        self.events.push(GateEvent::TxWhitelisted { tx_hash, country });
        Ok(())
    }

    pub fn revoke_tx(&mut self, ctx: &CallContext, tx_hash: TxHash) -> Result<(), GateError> {
        let country = self.ensure_country(ctx)?;
        if !self.state.whitelist.remove(&(tx_hash, country)) {
            return Err(GateError::NotWhitelisted);
        }
        debug!(%tx_hash, %country, "tx approval revoked");
        self.events.push(GateEvent::TxRevoked { tx_hash, country });
        Ok(())
    }

    fn ensure_country(&self, ctx: &CallContext) -> Result<Address, GateError> {
        if !self.state.is_country(&ctx.caller) {
            return Err(GateError::NotCountry);
        }
        Ok(ctx.caller)
    }

    // ── Execution ────────────────────────────────────────────────────────

    /// Execute `call_data` against `target`.
    ///
    /// Authorised by the operator inside its window, or by every country
    /// having whitelisted `call_hash(call_data, nonce)`. The nonce advances
    /// only if the target accepts the call.
    pub fn execute(
        &mut self,
        ctx: &CallContext,
        call_data: &[u8],
        target: &mut dyn CallTarget,
    ) -> Result<TxHash, GateError> {
        let nonce = self.state.nonce;
        let tx_hash = call_hash(call_data, nonce);
        let operator = self.state.operator;

        let authority = if operator.is(ctx.caller) && operator.phase(ctx.now).is_bootstrap() {
            Authority::Operator
        } else if self.state.is_unanimous(&tx_hash) {
            Authority::Unanimous
        } else if operator.is(ctx.caller) {
            warn!(operator = %ctx.caller, "execute by expired initial operator");
            return Err(GateError::OperatorExpired);
        } else {
            warn!(caller = %ctx.caller, %tx_hash, "execute without unanimous approval");
            return Err(GateError::NotWhitelisted);
        };

        let target_address = target.address();
        let mut staged = self.state.clone();
        staged.nonce = nonce.checked_add(1).ok_or(GateError::Overflow)?;
        // Approvals expire at the next execution, whatever it runs.
        staged.whitelist.clear();

        if let Err(e) = target.dispatch(&ctx.with_caller(self.address), call_data) {
            warn!(%tx_hash, target = %target_address, error = %e, "gated tx reverted in target");
            return Err(GateError::CallFailed(e));
        }

        self.state = staged;
        info!(
            %tx_hash,
            nonce,
            target = %target_address,
            executor = %ctx.caller,
            ?authority,
            "gated tx executed"
        );
        self.events.push(GateEvent::ExecutedTx {
            tx_hash,
            nonce,
            target: target_address,
            executor: ctx.caller,
            authority,
        });
        Ok(tx_hash)
    }

    // ── Operator ─────────────────────────────────────────────────────────

    /// Hand the bootstrap role to `new_operator`. The expiry does not move.
    pub fn transfer_initial_operator(
        &mut self,
        ctx: &CallContext,
        new_operator: Address,
    ) -> Result<(), GateError> {
        let operator = self.state.operator;
        if !operator.is(ctx.caller) {
            return Err(GateError::NotOperator);
        }
        if !operator.phase(ctx.now).is_bootstrap() {
            return Err(GateError::OperatorExpired);
        }
        if new_operator.is_zero() {
            return Err(GateError::ZeroAddress("new operator"));
        }
        self.state.operator.address = new_operator;
        info!(from = %ctx.caller, to = %new_operator, "initial operator transferred");
        self.events.push(GateEvent::OperatorTransferred {
            from: ctx.caller,
            to: new_operator,
        });
        Ok(())
    }

    /// Give up the bootstrap role for good, whether or not the window is still open.
    pub fn renounce_initial_operator(&mut self, ctx: &CallContext) -> Result<(), GateError> {
        if !self.state.operator.is(ctx.caller) {
            return Err(GateError::NotOperator);
        }
        self.state.operator = BootstrapOperator::NONE;
        info!(operator = %ctx.caller, "initial operator renounced");
        self.events.push(GateEvent::OperatorRenounced {
            operator: ctx.caller,
        });
        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn ledger_address(&self) -> Address {
        self.ledger
    }

    /// Operator address and seconds left in its window (zero once expired).
    pub fn initial_operator(&self, now: Timestamp) -> (Address, u64) {
        let op = self.state.operator;
        (op.address, op.expires_at.remaining_from(now))
    }

    pub fn phase(&self, now: Timestamp) -> AuthorityPhase {
        self.state.operator.phase(now)
    }

    pub fn nonce(&self) -> u64 {
        self.state.nonce
    }

    pub fn countries(&self) -> &[Address] {
        &self.state.countries
    }

    pub fn is_country(&self, address: Address) -> bool {
        self.state.is_country(&address)
    }

    pub fn is_whitelisted(&self, tx_hash: TxHash, country: Address) -> bool {
        self.state.whitelist.contains(&(tx_hash, country))
    }

    /// Hash countries must whitelist for `call_data` to run next.
    pub fn pending_tx_hash(&self, call_data: &[u8]) -> TxHash {
        call_hash(call_data, self.state.nonce)
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn drain_events(&mut self) -> Vec<GateEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Result<Vec<u8>, GateError> {
        self.state.to_bytes()
    }

    pub fn restore_snapshot(&mut self, bytes: &[u8]) -> Result<(), GateError> {
        self.state = GateState::from_bytes(bytes)?;
        Ok(())
    }
}

impl CountryRegistry for ConsensusGate {
    fn add_country(&mut self, ctx: &CallContext, country: Address) -> Result<(), ExternalError> {
        ConsensusGate::add_country(self, ctx, country)
            .map_err(|e| ExternalError::Rejected(e.to_string()))
    }
}
