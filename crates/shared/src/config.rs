//! Application configuration management.

use serde::Deserialize;

use crate::error::MoneyResult;
use crate::types::{Code, Money};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Money defaults.
    #[serde(default)]
    pub money: MoneyConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Money defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct MoneyConfig {
    /// Currency used when a caller gives an amount without one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_currency() -> String {
    "GBP".to_string()
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
        }
    }
}

impl MoneyConfig {
    /// Validates and upper-cases the configured default currency.
    pub fn default_code(&self) -> MoneyResult<Code> {
        Code::new(self.default_currency.to_uppercase())
    }

    /// Creates money in the default currency.
    pub fn default_money(&self, amount: i64) -> MoneyResult<Money> {
        Ok(Money::in_currency(amount, self.default_code()?))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `COFFER__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("COFFER").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
