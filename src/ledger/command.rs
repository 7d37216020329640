use std::fmt;

use serde::Deserialize;

use super::account::Account;
use super::amount;
use super::error::{AmountIssue, CommandError, Error, LedgerError};
use super::transaction::Transaction;
use super::Decimal;

/// Raw command record as parsed from a CSV script.
/// This is the unvalidated form that needs conversion to a `Command`.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub op: Operation,
    /// Kept as text so a non-numeric amount is reported as a ledger rejection
    /// rather than a CSV error
    pub amount: Option<String>,
    /// Receiving side of a transfer, for display only
    pub destination: Option<String>,
    /// How many of the most recent transactions a history query returns
    pub limit: Option<usize>,
}

impl fmt::Display for CommandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.op)?;
        if let Some(amount) = &self.amount {
            write!(f, " (amount: {amount})")?;
        }
        if let Some(destination) = &self.destination {
            write!(f, " (destination: {destination})")?;
        }
        if let Some(limit) = self.limit {
            write!(f, " (limit: {limit})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Deposit,
    #[serde(alias = "withdrawal")]
    Withdraw,
    Transfer,
    Balance,
    History,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deposit => write!(f, "deposit"),
            Operation::Withdraw => write!(f, "withdraw"),
            Operation::Transfer => write!(f, "transfer"),
            Operation::Balance => write!(f, "balance"),
            Operation::History => write!(f, "history"),
        }
    }
}

/// A validated command ready to be applied to an account.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Deposit(Decimal),
    Withdraw(Decimal),
    TransferOut {
        amount: Decimal,
        destination: Option<String>,
    },
    Balance,
    History {
        limit: Option<usize>,
    },
}

impl TryFrom<CommandRecord> for Command {
    type Error = Error;

    fn try_from(record: CommandRecord) -> Result<Self, Self::Error> {
        match record {
            CommandRecord {
                op: Operation::Deposit,
                amount: Some(ref raw),
                destination: None,
                limit: None,
            } => Ok(Command::Deposit(amount::parse(raw)?)),
            CommandRecord {
                op: Operation::Withdraw,
                amount: Some(ref raw),
                destination: None,
                limit: None,
            } => Ok(Command::Withdraw(amount::parse(raw)?)),
            CommandRecord {
                op: Operation::Transfer,
                amount: Some(ref raw),
                ref destination,
                limit: None,
            } => Ok(Command::TransferOut {
                amount: amount::parse(raw)?,
                destination: destination.clone(),
            }),
            CommandRecord {
                op: Operation::Deposit | Operation::Withdraw | Operation::Transfer,
                amount: None,
                ..
            } => Err(LedgerError::InvalidAmount {
                amount: String::new(),
                reason: AmountIssue::Missing,
            }
            .into()),
            CommandRecord {
                op: Operation::Balance,
                amount: None,
                destination: None,
                limit: None,
            } => Ok(Command::Balance),
            CommandRecord {
                op: Operation::History,
                amount: None,
                destination: None,
                limit,
            } => Ok(Command::History { limit }),
            _ => Err(CommandError::Malformed(record).into()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Deposit(amount) => write!(f, "[deposit] amount={amount}"),
            Command::Withdraw(amount) => write!(f, "[withdraw] amount={amount}"),
            Command::TransferOut {
                amount,
                destination: Some(destination),
            } => write!(f, "[transfer] amount={amount} to={destination}"),
            Command::TransferOut {
                amount,
                destination: None,
            } => write!(f, "[transfer] amount={amount}"),
            Command::Balance => write!(f, "[balance]"),
            Command::History { limit: Some(limit) } => write!(f, "[history] limit={limit}"),
            Command::History { limit: None } => write!(f, "[history]"),
        }
    }
}

/// The structured result of a successful command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A balance change and the audit entry it produced
    Recorded(Transaction),
    Balance(Decimal),
    History(Vec<Transaction>),
}

impl Account {
    /// Execute a validated command against this account.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, LedgerError> {
        log::trace!("Applying command: {command}");
        match command {
            Command::Deposit(amount) => self.deposit(amount).map(Outcome::Recorded),
            Command::Withdraw(amount) => self.withdraw(amount).map(Outcome::Recorded),
            Command::TransferOut {
                amount,
                destination,
            } => self
                .transfer_out(amount, destination.as_deref())
                .map(Outcome::Recorded),
            Command::Balance => Ok(Outcome::Balance(self.balance())),
            Command::History { limit } => Ok(Outcome::History(self.history(limit).to_vec())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::transaction::TransactionKind;
    use rust_decimal_macros::dec;

    fn make_record(op: Operation, amount: Option<&str>) -> CommandRecord {
        CommandRecord {
            op,
            amount: amount.map(str::to_string),
            destination: None,
            limit: None,
        }
    }

    #[test]
    fn test_valid_deposit() {
        let command = Command::try_from(make_record(Operation::Deposit, Some("100.5"))).unwrap();
        assert_eq!(command, Command::Deposit(dec!(100.5)));
    }

    #[test]
    fn test_valid_withdraw() {
        let command = Command::try_from(make_record(Operation::Withdraw, Some("50"))).unwrap();
        assert_eq!(command, Command::Withdraw(dec!(50)));
    }

    #[test]
    fn test_valid_transfer_with_destination() {
        let record = CommandRecord {
            destination: Some("200-333-444".to_string()),
            ..make_record(Operation::Transfer, Some("66"))
        };
        assert_eq!(
            Command::try_from(record).unwrap(),
            Command::TransferOut {
                amount: dec!(66),
                destination: Some("200-333-444".to_string()),
            }
        );
    }

    #[test]
    fn test_negative_amount_parses_and_is_rejected_by_the_account() {
        // Sign is checked by the account, not the parser
        let command = Command::try_from(make_record(Operation::Withdraw, Some("-50"))).unwrap();
        let mut account = Account::open("1", "Owner", dec!(100)).unwrap();
        assert!(matches!(
            account.apply(command),
            Err(LedgerError::InvalidAmount {
                reason: AmountIssue::NotPositive,
                ..
            })
        ));
    }

    #[test]
    fn test_non_numeric_amount_is_a_ledger_error() {
        let err = Command::try_from(make_record(Operation::Deposit, Some("lots"))).unwrap_err();
        assert!(matches!(
            err,
            Error::Ledger(LedgerError::InvalidAmount {
                reason: AmountIssue::NotNumeric,
                ..
            })
        ));
    }

    #[test]
    fn test_missing_amount_is_a_ledger_error() {
        let err = Command::try_from(make_record(Operation::Transfer, None)).unwrap_err();
        assert!(matches!(
            err,
            Error::Ledger(LedgerError::InvalidAmount {
                reason: AmountIssue::Missing,
                ..
            })
        ));
    }

    #[test]
    fn test_queries_reject_amount() {
        let err = Command::try_from(make_record(Operation::Balance, Some("1"))).unwrap_err();
        assert!(matches!(err, Error::Command(CommandError::Malformed(_))));
    }

    #[test]
    fn test_destination_only_on_transfers() {
        let record = CommandRecord {
            destination: Some("200-333-444".to_string()),
            ..make_record(Operation::Deposit, Some("1"))
        };
        assert!(matches!(
            Command::try_from(record),
            Err(Error::Command(CommandError::Malformed(_)))
        ));
    }

    #[test]
    fn test_limit_only_on_history() {
        let history = CommandRecord {
            limit: Some(2),
            ..make_record(Operation::History, None)
        };
        assert_eq!(
            Command::try_from(history).unwrap(),
            Command::History { limit: Some(2) }
        );

        let balance = CommandRecord {
            limit: Some(2),
            ..make_record(Operation::Balance, None)
        };
        assert!(Command::try_from(balance).is_err());
    }

    #[test]
    fn test_apply_returns_structured_outcomes() {
        let mut account = Account::open("100-222-333", "Lady Vader", dec!(666)).unwrap();

        assert_eq!(
            account.apply(Command::Balance).unwrap(),
            Outcome::Balance(dec!(666))
        );

        let Outcome::Recorded(tx) = account.apply(Command::Deposit(dec!(100))).unwrap() else {
            panic!("deposit should record a transaction");
        };
        assert_eq!(tx.kind(), TransactionKind::Deposit);
        assert_eq!(tx.balance_after(), dec!(766));

        let Outcome::History(history) = account.apply(Command::History { limit: None }).unwrap()
        else {
            panic!("history query should return transactions");
        };
        assert_eq!(history, vec![tx]);
    }

    #[test]
    fn test_record_display() {
        let record = CommandRecord {
            destination: Some("200-333-444".to_string()),
            ..make_record(Operation::Transfer, Some("66"))
        };
        assert_eq!(
            record.to_string(),
            "transfer (amount: 66) (destination: 200-333-444)"
        );
    }
}
