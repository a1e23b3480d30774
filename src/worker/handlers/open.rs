use std::rc::Rc;

use tracing::debug;

use crate::{
    common::money::Money,
    domain::{account::Account, bank::Bank, policy::OverdraftPolicy},
};

pub fn handle(bank: &Rc<Bank>, person: String, balance: Money, overdraft: OverdraftPolicy) {
    if bank.find_account(&person).is_some() {
        // Banks allow several accounts per person; later rows address the first one.
        debug!(%person, "opening additional account for existing person");
    }
    let account = Account::with_policy(person, balance, overdraft).into_handle();
    bank.add_account(&account);
}
