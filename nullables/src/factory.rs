//! Nullable DAO factory: deterministic token and DAO addresses.

use civic_interfaces::{DaoFactory, DaoInstance, ExternalError};
use civic_types::Address;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Hands out `token = base + 2n`, `dao = base + 2n + 1` for the n-th country.
#[derive(Clone)]
pub struct NullDaoFactory {
    address: Address,
    base: u64,
    created: Rc<RefCell<Vec<(String, DaoInstance)>>>,
    fail_next: Rc<Cell<bool>>,
}

impl NullDaoFactory {
    pub fn new(address: Address, base: u64) -> Self {
        Self {
            address,
            base,
            created: Rc::new(RefCell::new(Vec::new())),
            fail_next: Rc::new(Cell::new(false)),
        }
    }

    /// Make the next `instantiate` call fail.
    pub fn fail_next(&self) {
        self.fail_next.set(true);
    }

    /// Countries instantiated so far, in order.
    pub fn created(&self) -> Vec<(String, DaoInstance)> {
        self.created.borrow().clone()
    }

    /// The instance that would be handed out for the `n`-th call.
    pub fn instance_at(&self, n: u64) -> DaoInstance {
        DaoInstance {
            token: Address::from_low_u64(self.base + 2 * n),
            dao: Address::from_low_u64(self.base + 2 * n + 1),
        }
    }
}

impl DaoFactory for NullDaoFactory {
    fn address(&self) -> Address {
        self.address
    }

    fn instantiate(&mut self, country: &str) -> Result<DaoInstance, ExternalError> {
        if self.fail_next.replace(false) {
            return Err(ExternalError::Unavailable("factory failure injected".into()));
        }
        let mut created = self.created.borrow_mut();
        let instance = self.instance_at(created.len() as u64);
        created.push((country.to_string(), instance));
        Ok(instance)
    }
}
