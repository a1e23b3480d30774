use crate::common::money::Money;

/// A ledger operation sent from the reader to the worker for processing.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    Open { person: String, balance: Money },
    Credit { person: String, amount: Money },
    Debit { person: String, amount: Money },
    Transfer { from: String, to: String, amount: Money },
}
