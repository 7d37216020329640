//! A single-account ledger.
//!
//! An [`Account`] owns its identity, a non-negative balance and an
//! append-only history of [`Transaction`]s. Every balance change is validated
//! first and recorded in the same step.
//!
//! ```
//! use account_ledger::{Account, Decimal, TransactionKind};
//!
//! let mut account = Account::open("100-222-333", "Lady Vader", Decimal::from(666)).unwrap();
//! account.deposit(Decimal::from(100)).unwrap();
//! account.transfer_out(Decimal::from(66), Some("200-333-444")).unwrap();
//!
//! assert_eq!(account.balance(), Decimal::from(700));
//! assert_eq!(account.history(Some(1))[0].kind(), TransactionKind::TransferOut);
//! ```

mod ledger;

pub use ledger::{
    amount, Account, AmountIssue, Command, CommandError, CommandRecord, Decimal, Error,
    LedgerError, Operation, Outcome, ScriptSummary, Transaction, TransactionKind,
};
