use std::io::Read;

use super::account::Account;
use super::command::{Command, CommandRecord, Outcome};
use super::error::{Error, LedgerError};

/// Counts of script rows that were applied and rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSummary {
    pub applied: u64,
    pub rejected: u64,
}

impl Account {
    /// Replay a CSV command script (columns: op, amount, destination, limit) against this account.
    ///
    /// `on_step` receives the 1-based row number and the result of every row.
    /// Ledger rejections are handed to `on_step` and processing continues; IO, CSV
    /// and malformed-command errors stop processing and are returned.
    /// The CSV reader is buffered automatically; do not wrap `reader` in an `io::BufReader`.
    pub fn process_script<R, F>(
        &mut self,
        reader: R,
        mut on_step: F,
    ) -> Result<ScriptSummary, Error>
    where
        R: Read,
        F: FnMut(u64, Result<Outcome, LedgerError>),
    {
        log::info!("Starting script for account {}", self.account_id());

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut summary = ScriptSummary::default();

        for result in csv_reader.deserialize() {
            // Step 1: Parse CSV row into a raw CommandRecord
            let record: CommandRecord = result?;

            let row_num = summary.applied + summary.rejected + 1;
            log::trace!("[row {row_num}] Parsing: {record}");

            // Step 2: Validate, then apply. Only ledger rejections are soft.
            let outcome = match Command::try_from(record) {
                Ok(command) => self.apply(command),
                Err(Error::Ledger(e)) => Err(e),
                Err(e) => return Err(e),
            };

            match &outcome {
                Ok(_) => summary.applied += 1,
                Err(e) => {
                    log::warn!("[row {row_num}] - Rejected: {e}");
                    summary.rejected += 1;
                }
            }
            on_step(row_num, outcome);
        }

        log::info!(
            "Script complete: {} applied, {} rejected, balance {}",
            summary.applied,
            summary.rejected,
            self.balance()
        );
        Ok(summary)
    }
}
