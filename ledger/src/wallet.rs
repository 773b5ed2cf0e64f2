//! Wallet migration and allowances.

use civic_types::{Address, CallContext, Day};

use crate::engine::CivicLedger;
use crate::error::LedgerError;
use crate::event::LedgerEvent;

impl CivicLedger {
    /// Move the caller's citizenship to `new_wallet`. The old record becomes
    /// the zero record; balances stay where they are.
    pub fn change_wallet(&mut self, ctx: &CallContext, new_wallet: Address) -> Result<(), LedgerError> {
        self.ensure_not_paused()?;

        let record = self.citizen(ctx.caller);
        if !record.is_qualified {
            return Err(LedgerError::NotPassportHolder);
        }
        if record.has_claimed_on(Day::of(ctx.now)) {
            return Err(LedgerError::ClaimedAlready);
        }
        if new_wallet.is_zero() {
            return Err(LedgerError::ZeroAddress("new wallet"));
        }
        if self.citizen(new_wallet).is_qualified {
            return Err(LedgerError::WalletOccupied);
        }

        let mut staged = self.stage();
        staged.state.citizens.remove(&ctx.caller);
        staged.state.citizens.insert(new_wallet, record);
        staged.emit(LedgerEvent::WalletChanged {
            from: ctx.caller,
            to: new_wallet,
        });
        self.commit(staged);
        Ok(())
    }

    /// Set the caller's allowance for `spender` on the ledger token.
    pub fn approve(&mut self, ctx: &CallContext, spender: Address, amount: u128) -> Result<(), LedgerError> {
        if spender.is_zero() {
            return Err(LedgerError::ZeroAddress("spender"));
        }
        let token = self.address();
        let mut staged = self.stage();
        staged.state.tokens.approve(token, ctx.caller, spender, amount);
        self.commit(staged);
        Ok(())
    }
}
