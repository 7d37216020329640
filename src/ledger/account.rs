use std::fmt;

use chrono::Utc;

use super::amount;
use super::error::{AmountIssue, LedgerError};
use super::transaction::{Transaction, TransactionKind};
use super::Decimal;

/// A single account: identity, a non-negative balance and its audit trail.
///
/// The balance only changes through [`Account::deposit`], [`Account::withdraw`]
/// and [`Account::transfer_out`]. Each of them validates fully before mutating
/// and appends exactly one [`Transaction`] per balance change.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_id: String,
    owner_name: String,
    initial_balance: Decimal,
    balance: Decimal,
    history: Vec<Transaction>,
}

impl Account {
    /// Open an account with an empty history.
    /// Fails with `InvalidAmount` if `initial_balance` is negative.
    pub fn open(
        account_id: impl Into<String>,
        owner_name: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Self, LedgerError> {
        let initial_balance = amount::require_non_negative(initial_balance)?.normalize();
        let account = Self {
            account_id: account_id.into(),
            owner_name: owner_name.into(),
            initial_balance,
            balance: initial_balance,
            history: Vec::new(),
        };
        log::debug!(
            "Opened account {} for {} with balance {}",
            account.account_id,
            account.owner_name,
            account.balance
        );
        Ok(account)
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Returns the balance the account was opened with
    pub fn initial_balance(&self) -> Decimal {
        self.initial_balance
    }

    /// Returns the current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns the number of recorded transactions
    pub fn transaction_count(&self) -> usize {
        self.history.len()
    }

    /// Returns the last `limit` transactions in chronological order,
    /// or the whole history when `limit` is `None`.
    pub fn history(&self, limit: Option<usize>) -> &[Transaction] {
        let start = limit.map_or(0, |limit| self.history.len().saturating_sub(limit));
        &self.history[start..]
    }

    /// Recompute the balance by replaying the history from the opening balance.
    pub fn replayed_balance(&self) -> Decimal {
        self.history
            .iter()
            .fold(self.initial_balance, |balance, tx| balance + tx.delta())
            .normalize()
    }

    /// Credit the account.
    /// Returns the recorded transaction, whose `balance_after` is the new balance.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Transaction, LedgerError> {
        let amount = amount::require_positive(amount)?;
        let balance_after = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::InvalidAmount {
                amount: amount.to_string(),
                reason: AmountIssue::Overflow,
            })?;
        Ok(self.record(TransactionKind::Deposit, amount, balance_after, None))
    }

    /// Debit the account. Fails with `InsufficientFunds` if `amount` exceeds the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Transaction, LedgerError> {
        self.debit(TransactionKind::Withdrawal, amount, None)
    }

    /// Debit the account on behalf of a transfer.
    /// Same rules as [`Account::withdraw`]; `destination` is kept for display only.
    pub fn transfer_out(
        &mut self,
        amount: Decimal,
        destination: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        self.debit(
            TransactionKind::TransferOut,
            amount,
            destination.map(str::to_string),
        )
    }

    fn debit(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        destination: Option<String>,
    ) -> Result<Transaction, LedgerError> {
        let amount = amount::require_positive(amount)?;
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                account: self.account_id.clone(),
                available: self.balance,
                requested: amount,
            });
        }
        // Cannot overflow: 0 < amount <= balance
        let balance_after = self.balance - amount;
        Ok(self.record(kind, amount, balance_after, destination))
    }

    /// Apply an already validated balance change and append its audit entry.
    fn record(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        balance_after: Decimal,
        destination: Option<String>,
    ) -> Transaction {
        // Insertion order must stay chronological even if the wall clock steps back
        let now = Utc::now();
        let timestamp = self
            .history
            .last()
            .map_or(now, |last| last.timestamp().max(now));

        let tx = Transaction::new(
            timestamp,
            kind,
            amount,
            self.balance,
            balance_after,
            destination,
        );
        self.balance = tx.balance_after();
        self.history.push(tx.clone());

        log::trace!(
            "[{}] account={} amount={} -> new_balance={}",
            kind,
            self.account_id,
            amount,
            self.balance
        );
        #[cfg(debug_assertions)]
        self.assert_invariant();
        tx
    }

    /// Assert the bookkeeping invariants:
    /// balance is never negative
    /// balance = initial balance + sum of signed transaction amounts
    /// each entry starts where the previous one ended
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        debug_assert!(
            self.balance >= Decimal::ZERO,
            "Invariant violated: balance ({}) is negative",
            self.balance
        );
        let mut expected_before = self.initial_balance;
        for tx in &self.history {
            debug_assert_eq!(
                tx.balance_before(),
                expected_before,
                "Invariant violated: history is not contiguous"
            );
            expected_before = tx.balance_after();
        }
        debug_assert_eq!(
            self.balance, expected_before,
            "Invariant violated: balance ({}) != replayed history ({})",
            self.balance, expected_before
        );
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} ({}): balance {}, {} transaction(s)",
            self.account_id,
            self.owner_name,
            self.balance,
            self.history.len()
        )
    }
}
