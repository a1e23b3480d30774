use crate::{
    common::error::AppError,
    domain::{account::AccountHandle, bank::Bank},
};

pub mod credit;
pub mod debit;
pub mod open;
pub mod transfer;

/// Resolves a person to the first account the bank holds for them.
fn lookup(bank: &Bank, person: &str) -> Result<AccountHandle, AppError> {
    bank.find_account(person)
        .ok_or_else(|| AppError::UnknownAccount(person.to_string()))
}
