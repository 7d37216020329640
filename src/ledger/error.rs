use std::fmt;

use crate::ledger::command::CommandRecord;
use crate::ledger::Decimal;

/// Top-level error type for script processing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Command error: {0}")]
    Command(#[from] CommandError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Errors during `CommandRecord` -> `Command` conversion (hard errors).
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Malformed command: {0}")]
    Malformed(CommandRecord),
}

/// Rejections raised by the ledger itself.
/// No state has changed when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid amount '{amount}': {reason}")]
    InvalidAmount { amount: String, reason: AmountIssue },

    #[error("Insufficient funds: account {account} has {available}, requested {requested}")]
    InsufficientFunds {
        account: String,
        available: Decimal,
        requested: Decimal,
    },
}

/// Why an amount was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountIssue {
    Missing,
    NotNumeric,
    NotPositive,
    Negative,
    /// The resulting balance would not fit in a `Decimal`
    Overflow,
}

impl fmt::Display for AmountIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountIssue::Missing => write!(f, "an amount is required"),
            AmountIssue::NotNumeric => write!(f, "not a number"),
            AmountIssue::NotPositive => write!(f, "must be greater than zero"),
            AmountIssue::Negative => write!(f, "must not be negative"),
            AmountIssue::Overflow => write!(f, "balance would overflow"),
        }
    }
}
