use crate::common::{event::LedgerEvent, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. The
/// counterparty is only filled in for transfers.
struct CsvRow {
    #[serde(rename = "type")]
    op_type: String,
    person: String,
    counterparty: Option<String>,
    amount: Option<String>,
}

/// Reads and validates ledger operations from a CSV reader.
///
/// Supported headers: `type,person,counterparty,amount`.
/// The `type` field is case-insensitive. Every operation needs an `amount`,
/// and `transfer` also needs a `counterparty`; errors name the row's person.
///
/// # Examples
///
/// ```
/// use bank_ledger::io::reader::read_operations;
/// use bank_ledger::common::event::LedgerEvent;
/// use csv::ReaderBuilder;
///
/// let data = "type,person,counterparty,amount\n\
/// open,Fede,,1000.0001\n\
/// transfer,Fede,Lola,100\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let events: Vec<_> = read_operations(&mut rdr).collect();
///
/// assert!(matches!(&events[0], Ok(LedgerEvent::Open { person, .. }) if person == "Fede"));
/// assert!(matches!(&events[1], Ok(LedgerEvent::Transfer { to, .. }) if to == "Lola"));
/// ```
pub fn read_operations<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<LedgerEvent, String>> + '_ {
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.op_type.trim().to_ascii_lowercase();
        let person = row.person.trim().to_string();
        if person.is_empty() {
            return Err(format!("{kind} row is missing a person"));
        }

        let amount = parse_amount(&kind, &person, row.amount.as_deref())?;

        match kind.as_str() {
            "open" => Ok(LedgerEvent::Open {
                person,
                balance: amount,
            }),
            "credit" => Ok(LedgerEvent::Credit { person, amount }),
            "debit" => Ok(LedgerEvent::Debit { person, amount }),
            "transfer" => {
                let to = row
                    .counterparty
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .ok_or_else(|| format!("transfer from {person} missing counterparty"))?;
                Ok(LedgerEvent::Transfer {
                    from: person,
                    to,
                    amount,
                })
            }
            other => Err(format!("unknown operation type: {other}")),
        }
    })
}

fn parse_amount(kind: &str, person: &str, raw: Option<&str>) -> Result<Money, String> {
    let raw = raw.ok_or_else(|| format!("{kind} missing amount for {person}"))?;
    Money::from_str(raw).map_err(|e| format!("{kind} for {person}: invalid amount '{raw}': {e}"))
}
