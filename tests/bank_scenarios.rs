use std::str::FromStr;

use bank_ledger::{
    common::{error::LedgerError, money::Money},
    domain::{account::Account, bank::Bank},
};

fn money(s: &str) -> Money {
    Money::from_str(s).unwrap()
}

#[test]
fn debit_and_credit_on_a_fresh_account() {
    let mut debited = Account::new("Fede", money("1000.0001"));
    debited.debit(&Money::from(100)).unwrap();
    assert_eq!(debited.balance().to_string(), "900.0001");

    let mut credited = Account::new("Fede", money("1000.0001"));
    credited.credit(&Money::from(100));
    assert_eq!(credited.balance().to_string(), "1100.0001");
}

#[test]
fn accounts_compare_by_person_and_balance() {
    let fede = Account::new("Fede", money("1000.0001"));
    let fede_copy = Account::new("Fede", money("1000.0001"));
    let rodrigo = Account::new("Rodrigo", money("100.001"));

    assert_eq!(fede, fede_copy);
    assert_ne!(fede_copy, rodrigo);
    assert_ne!(fede, Account::new("Fede", money("1000.00010")));
}

#[test]
fn bank_transfer_between_registered_accounts() {
    let bank = Bank::new("Banco del Estado");
    let lola = Account::new("Lola", money("2500")).into_handle();
    let fede = Account::new("Fede", money("1500.8989")).into_handle();
    bank.add_account(&lola);
    bank.add_account(&fede);

    bank.transfer(&fede, &lola, &money("500")).unwrap();

    assert_eq!(fede.borrow().balance(), &money("1000.8989"));
    assert_eq!(lola.borrow().balance(), &money("3000"));
    assert_eq!(bank.accounts().len(), 2);

    let accounts = bank.accounts();
    assert_eq!(accounts[0].borrow().person(), "Lola");
    assert_eq!(accounts[1].borrow().person(), "Fede");
    for acc in &accounts {
        assert_eq!(acc.borrow().bank().unwrap().name(), "Banco del Estado");
    }
}

#[test]
fn overdraft_is_rejected_with_fixed_message() {
    let mut fede = Account::new("Fede", money("1000.0001"));

    let err = fede.debit(&money("1500")).unwrap_err();

    assert_eq!(err, LedgerError::InsufficientFunds);
    assert_eq!(err.to_string(), "Insufficient funds");
    assert_eq!(fede.balance(), &money("1000.0001"));
}

#[test]
fn overdrawn_transfer_changes_neither_side() {
    let bank = Bank::new("Banco del Estado");
    let from = Account::new("Fede", money("100")).into_handle();
    let to = Account::new("Lola", money("0.5")).into_handle();
    bank.add_account(&from);
    bank.add_account(&to);

    let err = bank.transfer(&from, &to, &money("100.0001")).unwrap_err();

    assert_eq!(err, LedgerError::InsufficientFunds);
    assert_eq!(from.borrow().balance(), &money("100"));
    assert_eq!(to.borrow().balance(), &money("0.5"));
}
