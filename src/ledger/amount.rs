//! Amount parsing and validation.
//!
//! Every entry point that accepts money runs its input through one of these
//! functions before any state is touched.

use std::str::FromStr;

use crate::ledger::error::{AmountIssue, LedgerError};
use crate::ledger::Decimal;

/// Parse user-supplied text into an amount.
/// Surrounding whitespace is ignored; empty or non-numeric text is refused.
pub fn parse(input: &str) -> Result<Decimal, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid(input, AmountIssue::Missing));
    }
    Decimal::from_str(trimmed).map_err(|_| invalid(trimmed, AmountIssue::NotNumeric))
}

/// Amounts moved by deposits, withdrawals and transfers must be strictly positive.
pub fn require_positive(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount > Decimal::ZERO {
        Ok(amount)
    } else {
        Err(invalid(&amount.to_string(), AmountIssue::NotPositive))
    }
}

/// Opening balances may be zero but never negative.
pub fn require_non_negative(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount < Decimal::ZERO {
        Err(invalid(&amount.to_string(), AmountIssue::Negative))
    } else {
        Ok(amount)
    }
}

fn invalid(amount: &str, reason: AmountIssue) -> LedgerError {
    LedgerError::InvalidAmount {
        amount: amount.to_string(),
        reason,
    }
}
