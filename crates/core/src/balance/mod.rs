//! Dated money observations.
//!
//! This module implements:
//! - The `Balance` value and its zero-date check
//! - `Balances` aggregates (sum, earliest, latest)
//! - Error types for balance operations

pub mod collection;
pub mod error;
pub mod types;

#[cfg(test)]
mod collection_props;

pub use collection::Balances;
pub use error::BalanceError;
pub use types::{Balance, BalanceRecord};
