//! Balance and allowance bookkeeping.
//!
//! Only what claims and votes need: mint, burn, approve and reads. Balances
//! are scoped by token address; the ledger's own address names its daily
//! issuance token, and each DAO carries its own token.

use civic_types::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::LedgerError;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenBook {
    balances: HashMap<(Address, Address), u128>,
    allowances: HashMap<(Address, Address, Address), u128>,
    supply: HashMap<Address, u128>,
}

impl TokenBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, token: Address, holder: Address) -> u128 {
        self.balances.get(&(token, holder)).copied().unwrap_or(0)
    }

    pub fn allowance(&self, token: Address, owner: Address, spender: Address) -> u128 {
        self.allowances
            .get(&(token, owner, spender))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_supply(&self, token: Address) -> u128 {
        self.supply.get(&token).copied().unwrap_or(0)
    }

    pub fn mint(&mut self, token: Address, to: Address, amount: u128) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let supply = self.supply.entry(token).or_insert(0);
        *supply = supply.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let balance = self.balances.entry((token, to)).or_insert(0);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    pub fn burn(&mut self, token: Address, from: Address, amount: u128) -> Result<(), LedgerError> {
        if amount == 0 {
            return Ok(());
        }
        let balance = self.balance_of(token, from);
        if balance < amount {
            return Err(LedgerError::BurnExceedsBalance { amount, balance });
        }
        self.balances.insert((token, from), balance - amount);
        let supply = self.supply.entry(token).or_insert(0);
        *supply = supply.saturating_sub(amount);
        Ok(())
    }

    pub fn approve(&mut self, token: Address, owner: Address, spender: Address, amount: u128) {
        if amount == 0 {
            self.allowances.remove(&(token, owner, spender));
        } else {
            self.allowances.insert((token, owner, spender), amount);
        }
    }
}
