use std::io::Write;

use crate::domain::account::AccountHandle;

#[derive(serde::Serialize)]
/// Internal CSV output row. Headers written (in this order): `person,balance`.
struct StatementRow {
    person: String,
    balance: String,
}

/// Writes an account statement to a CSV writer.
///
/// One row per account, in the order given, which for
/// [`Bank::accounts`](crate::domain::bank::Bank::accounts) is registration
/// order. Balances are written in plain decimal notation with the scale they
/// carry.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bank_ledger::common::money::Money;
/// use bank_ledger::domain::{account::Account, bank::Bank};
/// use bank_ledger::io::writer::write_statement;
///
/// let bank = Bank::new("Galicia");
/// bank.add_account(&Account::new("Lola", Money::from(2500)).into_handle());
///
/// let mut out = Vec::new();
/// write_statement(&mut out, &bank.accounts()).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "person,balance\nLola,2500\n");
/// ```
pub fn write_statement<W: Write>(writer: W, accounts: &[AccountHandle]) -> Result<(), csv::Error> {
    // Headers are written by hand so an empty statement still carries them.
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["person", "balance"])?;

    for handle in accounts {
        let acc = handle.borrow();
        wtr.serialize(StatementRow {
            person: acc.person().to_string(),
            balance: acc.balance().to_string(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
