//! Typed historical price requests.

use folio_core::types::{Interval, Period};
use folio_core::{FolioError, FolioResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters of a historical price request: (symbol, period, interval).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoricalRequest {
    /// Upper-cased ticker symbol.
    pub symbol: String,

    /// Requested time span.
    #[serde(default)]
    pub period: Period,

    /// Requested sampling interval.
    #[serde(default)]
    pub interval: Interval,
}

impl HistoricalRequest {
    /// Creates a request, normalizing the symbol.
    ///
    /// The symbol is trimmed and upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidAsset`] if the symbol is blank.
    pub fn new(symbol: &str, period: Period, interval: Interval) -> FolioResult<Self> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(FolioError::invalid_asset(symbol, "symbol is empty"));
        }
        Ok(Self {
            symbol,
            period,
            interval,
        })
    }

    /// Creates a request with the default period (`1y`) and interval (`1d`).
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidAsset`] if the symbol is blank.
    pub fn for_symbol(symbol: &str) -> FolioResult<Self> {
        Self::new(symbol, Period::default(), Interval::default())
    }

    /// Creates a request from raw tokens, e.g. `("aapl", "6mo", "1wk")`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::UnknownToken`] for an unrecognized period or
    /// interval, or [`FolioError::InvalidAsset`] for a blank symbol.
    pub fn parse(symbol: &str, period: &str, interval: &str) -> FolioResult<Self> {
        Self::new(symbol, period.parse()?, interval.parse()?)
    }
}

impl fmt::Display for HistoricalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.symbol, self.period, self.interval)
    }
}
