use std::path::PathBuf;

use clap::Parser;

/// Check an account and its balances.
#[derive(Debug, Parser)]
#[command(name = "coffer-checker", version, about)]
pub struct Cli {
    /// JSON document holding `account` and `balances`.
    pub file: PathBuf,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}
