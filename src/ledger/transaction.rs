use std::fmt;

use chrono::{DateTime, Utc};

use crate::ledger::Decimal;

/// The kind of balance change a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    TransferOut,
}

impl TransactionKind {
    /// Whether this kind removes funds from the account.
    pub fn is_debit(self) -> bool {
        !matches!(self, TransactionKind::Deposit)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "deposit"),
            TransactionKind::Withdrawal => write!(f, "withdrawal"),
            TransactionKind::TransferOut => write!(f, "transfer-out"),
        }
    }
}

/// An immutable audit record of one balance-changing event.
///
/// Only the ledger creates these; callers read them through the accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    timestamp: DateTime<Utc>,
    kind: TransactionKind,
    amount: Decimal,
    balance_before: Decimal,
    balance_after: Decimal,
    /// Free-text label of the receiving side, only set on transfers
    destination: Option<String>,
}

impl Transaction {
    pub(super) fn new(
        timestamp: DateTime<Utc>,
        kind: TransactionKind,
        amount: Decimal,
        balance_before: Decimal,
        balance_after: Decimal,
        destination: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            kind,
            amount,
            balance_before,
            balance_after: balance_after.normalize(),
            destination,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn balance_before(&self) -> Decimal {
        self.balance_before
    }

    pub fn balance_after(&self) -> Decimal {
        self.balance_after
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// Signed effect of this transaction on the balance.
    pub fn delta(&self) -> Decimal {
        if self.kind.is_debit() {
            -self.amount
        } else {
            self.amount
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] amount={} balance={} -> {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount,
            self.balance_before,
            self.balance_after
        )?;
        if let Some(destination) = &self.destination {
            write!(f, " to={destination}")?;
        }
        Ok(())
    }
}
