mod commands;
mod demo;
mod report;

use std::io::{Cursor, Read};

use account_ledger::{amount, Account, ScriptSummary};
use anyhow::{Context, Result};
use commands::{Args, Mode, Parser};

fn main() -> Result<()> {
    // Parse the CLI arguments
    let args = Args::parse();

    // Initialize logger with default level of warn (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 1. Open the account; a bad opening balance is reported, not propagated
    let opened = amount::parse(&args.initial_balance)
        .and_then(|balance| Account::open(&args.account_id, &args.owner, balance));
    let mut account = match opened {
        Ok(account) => account,
        Err(e) => {
            println!("{}", report::rejection(&e));
            return Ok(());
        }
    };
    println!("{}", report::opened(&account));

    // 2. Replay the selected script
    let summary = match args.mode {
        Mode::Demo => run(&mut account, Cursor::new(demo::DEMO_SCRIPT)),
        Mode::Run { script: Some(path) } => {
            log::info!("Replaying script from {}", path.display());
            let file = std::fs::File::open(&path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            run(&mut account, file)
        }
        Mode::Run { script: None } => run(&mut account, std::io::stdin().lock()),
    }?;

    log::info!(
        "Finished with {} applied and {} rejected operation(s)",
        summary.applied,
        summary.rejected
    );
    println!("{account}");

    Ok(())
}

fn run<R: Read>(account: &mut Account, reader: R) -> Result<ScriptSummary> {
    account
        .process_script(reader, |_, result| match result {
            Ok(outcome) => println!("{}", report::outcome(&outcome)),
            Err(e) => println!("{}", report::rejection(&e)),
        })
        .context("Failed to process script")
}
