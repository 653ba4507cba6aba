//! Currency codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{MoneyError, MoneyResult};

/// A 3 character currency code, e.g. "GBP".
///
/// Only the length is checked; codes are not matched against ISO 4217 so
/// private or legacy units still work. `Money::new` upper-cases before building
/// a code, `Code::new` keeps the input as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    /// Creates a code, failing unless `code` is exactly 3 characters long.
    pub fn new(code: impl Into<String>) -> MoneyResult<Self> {
        let code = Self(code.into());
        code.validate()?;
        Ok(code)
    }

    /// Pound sterling.
    #[must_use]
    pub fn gbp() -> Self {
        Self("GBP".to_owned())
    }

    /// Re-checks the length invariant.
    pub fn validate(&self) -> MoneyResult<()> {
        match self.0.chars().count() {
            3 => Ok(()),
            length => Err(MoneyError::InvalidCodeLength { length }),
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of decimal places in the currency's minor unit.
    #[must_use]
    pub fn minor_unit_exponent(&self) -> u32 {
        match self.0.to_ascii_uppercase().as_str() {
            "BIF" | "CLP" | "DJF" | "GNF" | "ISK" | "JPY" | "KMF" | "KRW" | "PYG" | "RWF"
            | "UGX" | "UYI" | "VND" | "VUV" | "XAF" | "XOF" | "XPF" => 0,
            "BHD" | "IQD" | "JOD" | "KWD" | "LYD" | "OMR" | "TND" => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Code {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
