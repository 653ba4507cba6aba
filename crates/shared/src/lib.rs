//! Shared value types, errors, and configuration for Coffer.
//!
//! This crate provides the leaf types every other crate builds on:
//! - Currency codes and currency-checked money
//! - Timestamp helpers (UTC, zero-timestamp detection)
//! - Money errors and the `Rejected` construction-failure carrier
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{AppConfig, LoggingConfig, MoneyConfig};
pub use error::{MoneyError, MoneyResult, Rejected};
pub use types::{Code, Money, Timestamp, ZeroTime};
