//! Human-readable rendering of ledger results.

use account_ledger::{Account, LedgerError, Outcome, Transaction, TransactionKind};

pub fn opened(account: &Account) -> String {
    format!(
        "Opened account {} for {} with balance {}",
        account.account_id(),
        account.owner_name(),
        account.balance()
    )
}

pub fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Recorded(tx) => recorded(tx),
        Outcome::Balance(balance) => format!("Balance: {balance}"),
        Outcome::History(history) if history.is_empty() => "No transactions".to_string(),
        Outcome::History(history) => history
            .iter()
            .map(|tx| format!("  {tx}"))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn rejection(error: &LedgerError) -> String {
    format!("Rejected: {error}")
}

fn recorded(tx: &Transaction) -> String {
    match (tx.kind(), tx.destination()) {
        (TransactionKind::Deposit, _) => {
            format!("Deposited {}. New balance: {}", tx.amount(), tx.balance_after())
        }
        (TransactionKind::Withdrawal, _) => {
            format!("Withdrew {}. New balance: {}", tx.amount(), tx.balance_after())
        }
        (TransactionKind::TransferOut, Some(destination)) => format!(
            "Transferred {} to {destination}. New balance: {}",
            tx.amount(),
            tx.balance_after()
        ),
        (TransactionKind::TransferOut, None) => format!(
            "Transferred {}. New balance: {}",
            tx.amount(),
            tx.balance_after()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_ledger::{AmountIssue, Decimal};
    use rust_decimal_macros::dec;

    fn lady_vader() -> Account {
        Account::open("100-222-333", "Lady Vader", dec!(666)).unwrap()
    }

    #[test]
    fn test_opened_line() {
        assert_eq!(
            opened(&lady_vader()),
            "Opened account 100-222-333 for Lady Vader with balance 666"
        );
    }

    #[test]
    fn test_balance_line() {
        assert_eq!(outcome(&Outcome::Balance(dec!(650))), "Balance: 650");
    }

    #[test]
    fn test_empty_history_line() {
        assert_eq!(outcome(&Outcome::History(Vec::new())), "No transactions");
    }

    #[test]
    fn test_history_prints_one_indented_line_per_entry() {
        let mut account = lady_vader();
        account.deposit(dec!(100)).unwrap();
        account.withdraw(dec!(50)).unwrap();

        let text = outcome(&Outcome::History(account.history(None).to_vec()));
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  ") && lines[0].contains("[deposit]"));
        assert!(lines[1].starts_with("  ") && lines[1].contains("[withdrawal]"));
    }

    #[test]
    fn test_recorded_lines() {
        let mut account = lady_vader();
        let deposit = account.deposit(dec!(100)).unwrap();
        let withdrawal = account.withdraw(dec!(50)).unwrap();
        let transfer = account.transfer_out(dec!(66), Some("200-333-444")).unwrap();
        let unlabeled = account.transfer_out(dec!(50), None).unwrap();

        assert_eq!(
            outcome(&Outcome::Recorded(deposit)),
            "Deposited 100. New balance: 766"
        );
        assert_eq!(
            outcome(&Outcome::Recorded(withdrawal)),
            "Withdrew 50. New balance: 716"
        );
        assert_eq!(
            outcome(&Outcome::Recorded(transfer)),
            "Transferred 66 to 200-333-444. New balance: 650"
        );
        assert_eq!(
            outcome(&Outcome::Recorded(unlabeled)),
            "Transferred 50. New balance: 600"
        );
    }

    #[test]
    fn test_rejection_lines() {
        let insufficient = LedgerError::InsufficientFunds {
            account: "100-222-333".to_string(),
            available: dec!(650),
            requested: dec!(10000),
        };
        assert_eq!(
            rejection(&insufficient),
            "Rejected: Insufficient funds: account 100-222-333 has 650, requested 10000"
        );

        let negative = Account::open("1", "Debtor", Decimal::NEGATIVE_ONE).unwrap_err();
        assert_eq!(
            negative,
            LedgerError::InvalidAmount {
                amount: "-1".to_string(),
                reason: AmountIssue::Negative,
            }
        );
        assert_eq!(
            rejection(&negative),
            "Rejected: Invalid amount '-1': must not be negative"
        );
    }
}
