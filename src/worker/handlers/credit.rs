use crate::{
    common::{error::AppError, money::Money},
    domain::bank::Bank,
};

pub fn handle(bank: &Bank, person: &str, amount: &Money) -> Result<(), AppError> {
    let account = super::lookup(bank, person)?;
    account.borrow_mut().credit(amount);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::domain::account::Account;

    #[test]
    fn credit_increases_balance() {
        let bank = Bank::new("test");
        let acc = Account::new("Fede", Money::from_str("1000.0001").unwrap()).into_handle();
        bank.add_account(&acc);

        handle(&bank, "Fede", &Money::from(100)).unwrap();

        assert_eq!(acc.borrow().balance().to_string(), "1100.0001");
    }

    #[test]
    fn credit_to_unknown_person_fails() {
        let bank = Bank::new("test");
        let err = handle(&bank, "Nadie", &Money::from(1)).unwrap_err();
        assert!(matches!(err, AppError::UnknownAccount(p) if p == "Nadie"));
    }
}
