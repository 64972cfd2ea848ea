//! Error types for portfolio analytics.
//!
//! Zero denominators yield 0 and unpriced holdings are flagged, not
//! rejected. The hard failures are an empty price series and a value or
//! total that overflows `Decimal`, reported through [`FolioError::Overflow`].

use folio_core::types::{Interval, Period};
use folio_core::FolioError;
use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during analytics operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// A historical request returned no bars.
    #[error("No data available for this symbol")]
    EmptySeries {
        /// The requested symbol.
        symbol: String,
        /// The requested period.
        period: Period,
        /// The requested interval.
        interval: Interval,
    },

    /// A core validation or overflow error.
    #[error(transparent)]
    Core(#[from] FolioError),
}

impl AnalyticsError {
    /// Create an empty series error.
    #[must_use]
    pub fn empty_series(symbol: impl Into<String>, period: Period, interval: Interval) -> Self {
        Self::EmptySeries {
            symbol: symbol.into(),
            period,
            interval,
        }
    }

    /// Returns true if this is an empty series error.
    #[must_use]
    pub fn is_empty_series(&self) -> bool {
        matches!(self, Self::EmptySeries { .. })
    }
}
