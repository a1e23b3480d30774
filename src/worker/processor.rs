use std::rc::Rc;

use crate::{
    common::{config::LedgerConfig, error::AppError, event::LedgerEvent},
    domain::bank::Bank,
    worker::handlers::{credit, debit, open, transfer},
};

/// Applies ledger events to a bank, one at a time.
#[derive(Debug, Default)]
pub struct Processor {
    config: LedgerConfig,
}
impl Processor {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn process(&mut self, bank: &Rc<Bank>, event: LedgerEvent) -> Result<(), AppError> {
        match event {
            LedgerEvent::Open { person, balance } => {
                open::handle(bank, person, balance, self.config.overdraft);
            }
            LedgerEvent::Credit { person, amount } => {
                credit::handle(bank, &person, &amount)?;
            }
            LedgerEvent::Debit { person, amount } => {
                debit::handle(bank, &person, &amount)?;
            }
            LedgerEvent::Transfer { from, to, amount } => {
                transfer::handle(bank, &from, &to, &amount)?;
            }
        }
        Ok(())
    }
}
