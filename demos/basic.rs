//! Basic example of using an `Account`.
//!
//! Run with: `cargo run --example basic`

use account_ledger::{Account, Decimal, Outcome};
use std::io::Cursor;

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut account = Account::open("100-222-333", "Lady Vader", Decimal::from(666))
        .expect("Failed to open account");

    // Direct calls
    account.deposit(Decimal::from(100)).expect("Deposit failed");
    if let Err(e) = account.withdraw(Decimal::from(10_000)) {
        println!("Withdrawal rejected: {e}");
    }

    // Sample operations as a CSV script
    let script = r"op,amount,destination,limit
withdraw,50,,
transfer,66,200-333-444,
deposit,not-a-number,,
history,,,
";

    account
        .process_script(Cursor::new(script), |row, result| match result {
            Ok(Outcome::History(history)) => {
                println!("[row {row}] history:");
                for tx in history {
                    println!("  {tx}");
                }
            }
            Ok(outcome) => println!("[row {row}] {outcome:?}"),
            Err(e) => println!("[row {row}] rejected: {e}"),
        })
        .expect("Failed to process script");

    println!("\n=== Final Account State ===");
    println!("{account}");
}
