//! OHLCV price bars.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One OHLCV sample of a symbol's price series.
///
/// Prices are expected to be positive but are not validated here; the
/// upstream provider owns that contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalBar {
    /// Session date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: Decimal,
    /// Session high.
    pub high: Decimal,
    /// Session low.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume.
    pub volume: u64,
}

impl HistoricalBar {
    /// Creates a bar from its OHLCV fields.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Creates a flat bar where open, high, low, and close are all `close`.
    #[must_use]
    pub fn flat(date: NaiveDate, close: Decimal, volume: u64) -> Self {
        Self::new(date, close, close, close, close, volume)
    }

    /// Returns high minus low.
    #[must_use]
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_flat_bar() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
        let bar = HistoricalBar::flat(date, dec!(153), 1_000);
        assert_eq!(bar.open, dec!(153));
        assert_eq!(bar.low, dec!(153));
        assert_eq!(bar.range(), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"date":"2023-01-01","open":148.0,"high":152.0,"low":147.0,
                       "close":150.0,"volume":1000000}"#;
        let bar: HistoricalBar = serde_json::from_str(json).unwrap();
        assert_eq!(bar.date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(bar.close, dec!(150));
        assert_eq!(bar.range(), dec!(5));
        assert_eq!(bar.volume, 1_000_000);
    }
}
