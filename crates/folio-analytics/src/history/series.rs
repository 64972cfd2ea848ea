//! Historical series normalization.
//!
//! Turns a raw, chronological bar sequence into the summary figures and the
//! capped, newest-first display slice that a price table shows.

use super::HistoricalRequest;
use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use folio_core::display::ChangeDirection;
use folio_core::percent_change;
use folio_core::types::{HistoricalBar, Interval, Period};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw price history for one symbol, as fetched from a market data provider.
///
/// `bars` must be in chronological order (oldest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Ticker symbol.
    pub symbol: String,

    /// Provider's long name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Provider's short name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Quote currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Listing exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,

    /// Requested time span.
    #[serde(default)]
    pub period: Period,

    /// Requested sampling interval.
    #[serde(default)]
    pub interval: Interval,

    /// Bars, oldest first.
    #[serde(default)]
    pub bars: Vec<HistoricalBar>,
}

impl PriceHistory {
    /// Creates a history for a request with no provider metadata.
    #[must_use]
    pub fn new(request: &HistoricalRequest, bars: Vec<HistoricalBar>) -> Self {
        Self {
            symbol: request.symbol.clone(),
            name: None,
            short_name: None,
            currency: None,
            exchange: None,
            period: request.period,
            interval: request.interval,
            bars,
        }
    }

    /// Sets the long name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the quote currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the exchange.
    #[must_use]
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Returns the long name, else the short name, else the symbol.
    #[must_use]
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.short_name.as_deref()]
            .into_iter()
            .flatten()
            .find(|n| !n.trim().is_empty())
            .unwrap_or(&self.symbol)
    }
}

/// A normalized historical series ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    /// Ticker symbol.
    pub symbol: String,

    /// Display name.
    pub name: String,

    /// Quote currency.
    pub currency: String,

    /// Listing exchange, if known.
    pub exchange: Option<String>,

    /// Requested time span.
    pub period: Period,

    /// Requested sampling interval.
    pub interval: Interval,

    /// Close of the latest bar.
    pub current_price: Decimal,

    /// Latest close minus the prior close (0 with a single bar).
    pub daily_change: Decimal,

    /// Daily change relative to the prior close, in percent.
    pub daily_change_percent: Decimal,

    /// Latest close minus the first close in the window.
    pub period_change: Decimal,

    /// Period change relative to the first close, in percent.
    pub period_change_percent: Decimal,

    /// Number of bars in the window.
    pub data_points: usize,

    /// Newest-first bars, capped at the display limit.
    pub display_bars: Vec<HistoricalBar>,

    /// Number of bars before capping.
    pub total_bars: usize,
}

impl HistoricalSeries {
    /// Returns true if the display slice omits older bars.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.display_bars.len() < self.total_bars
    }

    /// Returns the truncation notice shown under a capped table.
    #[must_use]
    pub fn display_notice(&self) -> Option<String> {
        self.is_truncated().then(|| {
            format!(
                "Showing latest {} data points out of {} total",
                self.display_bars.len(),
                self.total_bars
            )
        })
    }

    /// Returns the direction of the daily change.
    #[must_use]
    pub fn daily_direction(&self) -> ChangeDirection {
        ChangeDirection::of(self.daily_change)
    }

    /// Returns the direction of the period change.
    #[must_use]
    pub fn period_direction(&self) -> ChangeDirection {
        ChangeDirection::of(self.period_change)
    }
}

/// Normalizes a raw price history.
///
/// # Errors
///
/// Returns [`AnalyticsError::EmptySeries`] when the history has no bars.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use folio_analytics::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
/// let bars = vec![
///     HistoricalBar::flat(day(4), dec!(148), 1_000),
///     HistoricalBar::flat(day(5), dec!(150), 1_200),
///     HistoricalBar::flat(day(6), dec!(153), 900),
/// ];
/// let request = HistoricalRequest::for_symbol("aapl").unwrap();
/// let history = PriceHistory::new(&request, bars);
///
/// let series = normalize_series(&history, &AnalyticsConfig::default()).unwrap();
/// assert_eq!(series.current_price, dec!(153));
/// assert_eq!(series.daily_change, dec!(3));
/// assert_eq!(series.period_change, dec!(5));
/// assert_eq!(series.display_bars[0].close, dec!(153));
/// ```
pub fn normalize_series(
    history: &PriceHistory,
    config: &AnalyticsConfig,
) -> AnalyticsResult<HistoricalSeries> {
    let bars = &history.bars;
    let (Some(first), Some(last)) = (bars.first(), bars.last()) else {
        return Err(AnalyticsError::empty_series(
            &history.symbol,
            history.period,
            history.interval,
        ));
    };

    let prior_close = if bars.len() >= 2 {
        bars[bars.len() - 2].close
    } else {
        last.close
    };
    let daily_change = last.close - prior_close;
    let period_change = last.close - first.close;

    let display_bars: Vec<HistoricalBar> = bars
        .iter()
        .rev()
        .take(config.display_limit)
        .cloned()
        .collect();

    debug!(
        symbol = %history.symbol,
        bars = bars.len(),
        shown = display_bars.len(),
        "normalized price history"
    );

    Ok(HistoricalSeries {
        symbol: history.symbol.clone(),
        name: history.display_name().to_string(),
        currency: history
            .currency
            .clone()
            .unwrap_or_else(|| config.default_currency.clone()),
        exchange: history.exchange.clone(),
        period: history.period,
        interval: history.interval,
        current_price: last.close,
        daily_change,
        daily_change_percent: percent_change(prior_close, last.close),
        period_change,
        period_change_percent: percent_change(first.close, last.close),
        data_points: bars.len(),
        display_bars,
        total_bars: bars.len(),
    })
}
