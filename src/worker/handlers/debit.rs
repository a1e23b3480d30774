use crate::{
    common::{error::AppError, money::Money},
    domain::bank::Bank,
};

pub fn handle(bank: &Bank, person: &str, amount: &Money) -> Result<(), AppError> {
    let account = super::lookup(bank, person)?;
    account.borrow_mut().debit(amount)?;
    Ok(())
}
