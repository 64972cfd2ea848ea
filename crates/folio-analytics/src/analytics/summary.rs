//! Position summary with price statistics.
//!
//! Only priced holdings contribute to values and statistics; the position
//! count covers every holding.

use super::parallel::maybe_parallel_filter_map;
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use folio_core::types::Holding;
use folio_core::{checked_total, percentage, ratio, FolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Max, min, and mean of current prices across priced holdings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceStatistics {
    /// Highest current price.
    pub max: Decimal,
    /// Lowest current price.
    pub min: Decimal,
    /// Arithmetic mean of current prices.
    pub mean: Decimal,
}

/// Aggregate view of a portfolio's open positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionSummary {
    /// All holdings, priced or not.
    pub total_positions: usize,

    /// Holdings with a current price.
    pub priced_positions: usize,

    /// Market value of priced holdings.
    pub total_market_value: Decimal,

    /// Cost basis of priced holdings.
    pub total_cost_basis: Decimal,

    /// Market value minus cost basis.
    pub unrealized_gain_loss: Decimal,

    /// Unrealized gain/loss as a percentage of cost basis.
    pub unrealized_gain_loss_percent: Decimal,

    /// Price statistics over priced holdings.
    pub price_statistics: PriceStatistics,
}

impl PositionSummary {
    /// Returns the number of holdings without a current price.
    #[must_use]
    pub fn unpriced_positions(&self) -> usize {
        self.total_positions - self.priced_positions
    }
}

struct PricedPosition {
    price: Decimal,
    market_value: Decimal,
    cost_basis: Decimal,
}

/// Summarizes open positions.
///
/// # Errors
///
/// Returns [`crate::AnalyticsError::Core`] wrapping an overflow when a
/// value or a total leaves the `Decimal` range.
pub fn calculate_position_summary(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> AnalyticsResult<PositionSummary> {
    let priced = maybe_parallel_filter_map(holdings, config, |h| {
        let price = h.asset.current_price?;
        Some(priced_position(h, price))
    })
    .into_iter()
    .collect::<FolioResult<Vec<_>>>()?;

    let total_market_value =
        checked_total(priced.iter().map(|p| p.market_value), "total market value")?;
    let total_cost_basis = checked_total(priced.iter().map(|p| p.cost_basis), "total cost basis")?;
    let unrealized_gain_loss = total_market_value - total_cost_basis;

    let price_statistics = price_statistics(&priced)?;

    debug!(
        positions = holdings.len(),
        priced = priced.len(),
        %total_market_value,
        "calculated position summary"
    );

    Ok(PositionSummary {
        total_positions: holdings.len(),
        priced_positions: priced.len(),
        total_market_value,
        total_cost_basis,
        unrealized_gain_loss,
        unrealized_gain_loss_percent: percentage(unrealized_gain_loss, total_cost_basis),
        price_statistics,
    })
}

fn priced_position(h: &Holding, price: Decimal) -> FolioResult<PricedPosition> {
    Ok(PricedPosition {
        price,
        market_value: h.try_current_value()?.unwrap_or(Decimal::ZERO),
        cost_basis: h.try_cost_basis()?,
    })
}

fn price_statistics(priced: &[PricedPosition]) -> FolioResult<PriceStatistics> {
    let Some(first) = priced.first() else {
        return Ok(PriceStatistics::default());
    };

    let (max, min) = priced.iter().fold((first.price, first.price), |(max, min), p| {
        (max.max(p.price), min.min(p.price))
    });
    let sum = checked_total(priced.iter().map(|p| p.price), "price statistics")?;

    Ok(PriceStatistics {
        max,
        min,
        mean: ratio(sum, Decimal::from(priced.len()), Decimal::ZERO),
    })
}
