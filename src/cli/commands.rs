pub(crate) use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "account-ledger",
    author,
    version,
    about = "A single-account ledger with an audit trail",
    long_about = None,
    after_help = "SCRIPTS:\n    A script is a CSV file with columns: op, amount, destination, limit\n    where op is one of deposit, withdraw, transfer, balance, history.\n\n    account-ledger --initial-balance 100 run operations.csv"
)]
pub struct Args {
    /// Identifier of the account to open
    #[arg(long, value_name = "ID", default_value = "100-222-333")]
    pub account_id: String,

    /// Display name of the account owner
    #[arg(long, value_name = "NAME", default_value = "Lady Vader")]
    pub owner: String,

    /// Opening balance, must not be negative
    #[arg(
        long,
        value_name = "AMOUNT",
        default_value = "666",
        allow_hyphen_values = true
    )]
    pub initial_balance: String,

    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Run the built-in demo sequence
    Demo,
    /// Replay a CSV command script
    Run {
        /// Script to replay; reads stdin when omitted
        #[arg(value_name = "FILE")]
        script: Option<PathBuf>,
    },
}
