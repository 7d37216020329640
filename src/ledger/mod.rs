//! Ledger module.
//!
//! This module contains the account bookkeeping logic including:
//! - `Account` - Balance and append-only history of one account
//! - `Transaction` - Immutable audit records
//! - `amount` - Parsing and validation applied at every entry point
//! - `Command` types - Raw script records and their validated form
//! - `Error` types - Ledger rejections and hard processing errors

mod account;
pub mod amount;
mod command;
mod error;
mod script;
mod transaction;

pub use rust_decimal::Decimal;

pub use account::Account;
pub use command::{Command, CommandRecord, Operation, Outcome};
pub use error::{AmountIssue, CommandError, Error, LedgerError};
pub use script::ScriptSummary;
pub use transaction::{Transaction, TransactionKind};
