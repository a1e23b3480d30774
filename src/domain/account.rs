use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{bank::Bank, policy::OverdraftPolicy},
};

/// Shared handle to an account. Banks hold these, and callers keep clones to
/// keep operating on the same account after registering it.
pub type AccountHandle = Rc<RefCell<Account>>;

#[derive(Debug, Clone)]
pub struct Account {
    person: String,
    balance: Money,
    /// Bank the account was last registered with. Never keeps the bank alive.
    bank: Option<Weak<Bank>>,
    overdraft: OverdraftPolicy,
}

impl Account {
    /// Opens an account that refuses to go below zero.
    pub fn new(person: impl Into<String>, balance: Money) -> Self {
        Self::with_policy(person, balance, OverdraftPolicy::default())
    }

    pub fn with_policy(
        person: impl Into<String>,
        balance: Money,
        overdraft: OverdraftPolicy,
    ) -> Self {
        Self {
            person: person.into(),
            balance,
            bank: None,
            overdraft,
        }
    }

    pub fn into_handle(self) -> AccountHandle {
        Rc::new(RefCell::new(self))
    }

    /// Subtracts `amount` from the balance.
    ///
    /// Under [`OverdraftPolicy::Forbid`] a debit that would leave the balance
    /// negative fails with [`LedgerError::InsufficientFunds`] and the balance
    /// is left as it was.
    pub fn debit(&mut self, amount: &Money) -> Result<(), LedgerError> {
        let next = &self.balance - amount;
        if !self.overdraft.permits(&next) {
            debug!(person = %self.person, balance = %self.balance, %amount, "debit rejected");
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance = next;
        Ok(())
    }

    /// Adds `amount` to the balance. Zero and negative amounts are applied as given.
    pub fn credit(&mut self, amount: &Money) {
        self.balance += amount;
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn set_person(&mut self, person: impl Into<String>) {
        self.person = person.into();
    }

    pub fn balance(&self) -> &Money {
        &self.balance
    }

    /// Administrative override: overwrites the balance directly, bypassing
    /// the overdraft policy. A negative value is accepted.
    pub fn override_balance(&mut self, balance: Money) {
        self.balance = balance;
    }

    /// The bank this account is registered with, if that bank still exists.
    pub fn bank(&self) -> Option<Rc<Bank>> {
        self.bank.as_ref().and_then(Weak::upgrade)
    }

    pub fn set_bank(&mut self, bank: &Rc<Bank>) {
        self.bank = Some(Rc::downgrade(bank));
    }

    pub fn overdraft_policy(&self) -> OverdraftPolicy {
        self.overdraft
    }

    pub fn set_overdraft_policy(&mut self, overdraft: OverdraftPolicy) {
        self.overdraft = overdraft;
    }
}

/// Two accounts are equal when person and balance match, the balance down to
/// its scale (`1000.0001` is not `1000.00010`). The bank link and policy are
/// ignored. An account with an empty person is never equal to
/// anything, itself included.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        if self.person.is_empty() || other.person.is_empty() {
            return false;
        }
        self.person == other.person && self.balance.is_identical(&other.balance)
    }
}
