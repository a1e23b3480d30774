/// Failure raised by the account/bank domain.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient funds")]
    InsufficientFunds,
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing operations csv path. usage: cargo run -- <operations.csv>")]
    MissingArg,
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("unknown account: {0}")]
    UnknownAccount(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
