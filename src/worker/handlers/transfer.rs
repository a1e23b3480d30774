use crate::{
    common::{error::AppError, money::Money},
    domain::bank::Bank,
};

pub fn handle(bank: &Bank, from: &str, to: &str, amount: &Money) -> Result<(), AppError> {
    // Resolve both sides first so an unknown counterparty never leaves a
    // debit without its matching credit.
    let source = super::lookup(bank, from)?;
    let target = super::lookup(bank, to)?;
    bank.transfer(&source, &target, amount)?;
    Ok(())
}
