//! Builds and renders the check report for one document.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use coffer_core::account::AccountRecord;
use coffer_core::balance::BalanceRecord;
use coffer_core::{Account, Balance, Balances};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Input document: one account and the balances recorded against it.
#[derive(Debug, Deserialize)]
pub struct Document {
    /// The account.
    pub account: AccountRecord,
    /// Balances to check against the account.
    #[serde(default)]
    pub balances: Vec<BalanceRecord>,
}

/// Outcome of checking one balance.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BalanceCheck {
    /// Position in the input.
    pub index: usize,
    /// Error code, absent when the balance passed.
    pub code: Option<&'static str>,
    /// Error description, absent when the balance passed.
    pub error: Option<String>,
}

/// Result of checking a whole document.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Account name as given.
    pub account: String,
    /// Faults with the account itself.
    pub account_faults: Vec<String>,
    /// One entry per balance, in input order.
    pub balances: Vec<BalanceCheck>,
    /// Sum of the valid balances, or the currency error that stopped it.
    pub sum: Option<String>,
    /// Earliest valid balance, rendered.
    pub earliest: Option<String>,
    /// Latest valid balance, rendered.
    pub latest: Option<String>,
}

impl Report {
    /// Returns true if the account and every balance passed.
    pub fn passed(&self) -> bool {
        self.account_faults.is_empty() && self.balances.iter().all(|check| check.error.is_none())
    }

    /// Human-readable rendering.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "account: {}", self.account);
        for fault in &self.account_faults {
            let _ = writeln!(out, "  fault: {fault}");
        }
        for check in &self.balances {
            match &check.error {
                Some(error) => {
                    let _ = writeln!(out, "  balance #{}: {error}", check.index);
                }
                None => {
                    let _ = writeln!(out, "  balance #{}: ok", check.index);
                }
            }
        }
        for (label, value) in [
            ("sum", &self.sum),
            ("earliest", &self.earliest),
            ("latest", &self.latest),
        ] {
            if let Some(value) = value {
                let _ = writeln!(out, "{label}: {value}");
            }
        }
        out
    }
}

/// Reads and parses a document from disk.
pub fn load_document(path: &Path) -> anyhow::Result<Document> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Runs every check on `document`.
pub fn check(document: Document) -> Report {
    let name = document.account.name.clone();
    let account = match Account::try_from(document.account) {
        Ok(account) => account,
        Err(fields) => {
            debug!(account = %name, "Skipping balances of invalid account");
            return Report {
                account: name,
                account_faults: fields.messages(),
                balances: Vec::new(),
                sum: None,
                earliest: None,
                latest: None,
            };
        }
    };

    let mut valid = Balances::new();
    let mut checks = Vec::with_capacity(document.balances.len());
    for (index, record) in document.balances.into_iter().enumerate() {
        let outcome = Balance::try_from(record)
            .map_err(|err| (err.error_code(), err.to_string()))
            .and_then(|balance| {
                account
                    .validate_balance(&balance)
                    .map(|()| balance)
                    .map_err(|err| (err.error_code(), err.to_string()))
            });
        match outcome {
            Ok(balance) => {
                valid.push(balance);
                checks.push(BalanceCheck {
                    index,
                    code: None,
                    error: None,
                });
            }
            Err((code, error)) => checks.push(BalanceCheck {
                index,
                code: Some(code),
                error: Some(error),
            }),
        }
    }

    let sum = (!valid.is_empty()).then(|| match valid.sum() {
        Ok(total) => total.to_string(),
        Err(err) => format!("error: {err}"),
    });
    let render = |balance: &Balance| format!("{} {}", balance.date().to_rfc3339(), balance.money());
    let earliest = valid.earliest().ok().map(render);
    let latest = valid.latest().ok().map(render);

    info!(
        account = %account.name(),
        checked = checks.len(),
        valid = valid.len(),
        "Checked balances"
    );

    Report {
        account: name,
        account_faults: Vec::new(),
        balances: checks,
        sum,
        earliest,
        latest,
    }
}
