use std::io::{stdout, BufWriter, Read, Write};

use tracing::{info, warn};

use crate::{
    common::{config::LedgerConfig, error::AppError},
    domain::bank::Bank,
    io::{reader, writer},
    worker::processor::Processor,
};

/// Name given to the bank every batch run operates on.
pub const BANK_NAME: &str = "ledger";

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];

    let config = LedgerConfig::from_env()?;
    info!(input = %input_path, overdraft = %config.overdraft, "starting batch");

    let file = std::fs::File::open(input_path)?;
    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    run_batch(file, out, config)
}

/// Replays the operations CSV in `input` against a fresh bank and writes the
/// resulting statement to `output`.
///
/// Rows rejected by the ledger (insufficient funds) are logged and skipped;
/// any other failure stops the batch.
pub fn run_batch<R: Read, W: Write>(input: R, output: W, config: LedgerConfig) -> Result<(), AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);
    let operations = reader::read_operations(&mut reader);

    let bank = Bank::new(BANK_NAME);
    let mut processor = Processor::new(config);

    for (row, event) in operations.enumerate() {
        let event = event.map_err(AppError::Parse)?;
        match processor.process(&bank, event) {
            Ok(()) => {}
            Err(AppError::Ledger(e)) => warn!(row = row + 1, error = %e, "operation rejected"),
            Err(e) => return Err(e),
        }
    }

    info!(accounts = bank.len(), "batch complete");
    writer::write_statement(output, &bank.accounts())?;

    Ok(())
}
