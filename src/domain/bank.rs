use std::{cell::RefCell, rc::Rc};

use tracing::{debug, warn};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::account::AccountHandle,
};

/// A named, ordered collection of accounts that can move money between them.
///
/// Banks are created behind an `Rc` so registered accounts can point back at
/// them with a weak reference.
#[derive(Debug)]
pub struct Bank {
    name: RefCell<String>,
    accounts: RefCell<Vec<AccountHandle>>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: RefCell::new(name.into()),
            accounts: RefCell::new(Vec::new()),
        })
    }

    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        *self.name.borrow_mut() = name.into();
    }

    /// Appends `account` and points its bank link at this bank.
    ///
    /// Registering the same account twice stores it twice.
    pub fn add_account(self: &Rc<Self>, account: &AccountHandle) {
        account.borrow_mut().set_bank(self);
        self.accounts.borrow_mut().push(Rc::clone(account));
    }

    /// Registered accounts in insertion order. The handles are shared with
    /// the bank, so changes made through them are visible here.
    pub fn accounts(&self) -> Vec<AccountHandle> {
        self.accounts.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.accounts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.borrow().is_empty()
    }

    /// First registered account held by `person`.
    pub fn find_account(&self, person: &str) -> Option<AccountHandle> {
        self.accounts
            .borrow()
            .iter()
            .find(|acc| acc.borrow().person() == person)
            .cloned()
    }

    /// Debits `from`, then credits `to`.
    ///
    /// If the debit fails nothing is credited and the error is returned as
    /// is. Neither account has to be registered with this bank.
    pub fn transfer(
        &self,
        from: &AccountHandle,
        to: &AccountHandle,
        amount: &Money,
    ) -> Result<(), LedgerError> {
        let debited = from.borrow_mut().debit(amount);
        if let Err(e) = debited {
            warn!(bank = %self.name.borrow(), %amount, error = %e, "transfer aborted");
            return Err(e);
        }
        to.borrow_mut().credit(amount);

        debug!(
            bank = %self.name.borrow(),
            from = %from.borrow().person(),
            to = %to.borrow().person(),
            %amount,
            "transfer applied"
        );
        Ok(())
    }
}
