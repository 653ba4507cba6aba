//! Coffer checker
//!
//! Reads a JSON document with one account and its balances, validates each
//! balance against the account, and prints a report.

mod cli;
mod report;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use coffer_shared::{AppConfig, LoggingConfig};

use crate::cli::Cli;

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);
    if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: &Cli) -> anyhow::Result<bool> {
    let document = report::load_document(&cli.file)?;
    let report = report::check(document);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(report.passed())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: failed to load configuration: {err}");
            return ExitCode::from(1);
        }
    };
    init_tracing(&config.logging);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}
