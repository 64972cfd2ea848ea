//! Per-holding and portfolio performance.
//!
//! Current value, cost basis, and gain/loss are derived here and never
//! stored on the holding.

use super::parallel::maybe_parallel_map;
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use folio_core::display::ChangeDirection;
use folio_core::types::{AssetType, Holding};
use folio_core::{checked_total, percentage, FolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Derived performance of a single holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingPerformance {
    /// Identifier of the referenced asset.
    pub asset_id: u64,

    /// Asset symbol.
    pub symbol: String,

    /// Asset display name.
    pub name: String,

    /// Asset classification.
    pub asset_type: AssetType,

    /// Units held.
    pub quantity: Decimal,

    /// Average cost per unit.
    pub average_cost: Decimal,

    /// Price used for valuation, if the asset had one.
    pub current_price: Option<Decimal>,

    /// Quantity × current price (0 when unpriced).
    pub current_value: Decimal,

    /// Quantity × average cost.
    pub cost_basis: Decimal,

    /// Current value minus cost basis.
    pub gain_loss: Decimal,

    /// Gain/loss as a percentage of cost basis (0 when cost basis is 0).
    pub gain_loss_percent: Decimal,

    /// True when the asset had no current price and was valued at 0.
    pub price_stale: bool,
}

impl HoldingPerformance {
    /// Returns the direction of the gain/loss.
    #[must_use]
    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::of(self.gain_loss)
    }
}

/// Portfolio-level performance totals with the per-holding breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Sum of per-holding current values.
    pub total_value: Decimal,

    /// Sum of per-holding cost bases.
    pub total_cost: Decimal,

    /// Total value minus total cost.
    pub total_gain_loss: Decimal,

    /// Total gain/loss as a percentage of total cost (0 when total cost is 0).
    pub total_gain_loss_percent: Decimal,

    /// Number of holdings valued without a current price.
    pub stale_holdings: usize,

    /// Per-holding breakdown, in input order.
    pub holdings: Vec<HoldingPerformance>,
}

impl PerformanceMetrics {
    /// Returns the number of holdings evaluated.
    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    /// Returns true if no holdings were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Returns the direction of the total gain/loss.
    #[must_use]
    pub fn direction(&self) -> ChangeDirection {
        ChangeDirection::of(self.total_gain_loss)
    }

    /// Returns the holding with the highest gain/loss percent.
    ///
    /// Ties resolve to the earliest holding.
    #[must_use]
    pub fn best_performer(&self) -> Option<&HoldingPerformance> {
        self.holdings
            .iter()
            .rev()
            .max_by(|a, b| a.gain_loss_percent.cmp(&b.gain_loss_percent))
    }

    /// Returns the holding with the lowest gain/loss percent.
    ///
    /// Ties resolve to the earliest holding.
    #[must_use]
    pub fn worst_performer(&self) -> Option<&HoldingPerformance> {
        self.holdings
            .iter()
            .min_by(|a, b| a.gain_loss_percent.cmp(&b.gain_loss_percent))
    }
}

/// Derives the performance of one holding.
///
/// An unpriced asset values the holding at 0 and sets `price_stale`.
///
/// # Errors
///
/// Returns [`folio_core::FolioError::Overflow`] when value or cost basis
/// leaves the `Decimal` range, which a validated holding rules out.
pub fn evaluate_holding(holding: &Holding) -> FolioResult<HoldingPerformance> {
    let price_stale = holding.is_stale();
    if price_stale {
        warn!(
            symbol = %holding.symbol(),
            asset_id = holding.asset_id,
            "asset has no current price; valuing holding at 0"
        );
    }

    let current_value = holding.try_current_value()?.unwrap_or(Decimal::ZERO);
    let cost_basis = holding.try_cost_basis()?;
    let gain_loss = current_value - cost_basis;

    Ok(HoldingPerformance {
        asset_id: holding.asset_id,
        symbol: holding.asset.symbol.clone(),
        name: holding.asset.name.clone(),
        asset_type: holding.asset.asset_type,
        quantity: holding.quantity,
        average_cost: holding.average_cost,
        current_price: holding.asset.current_price,
        current_value,
        cost_basis,
        gain_loss,
        gain_loss_percent: percentage(gain_loss, cost_basis),
        price_stale,
    })
}

/// Calculates portfolio performance from a set of holdings.
///
/// Empty input yields all-zero metrics.
///
/// # Errors
///
/// Returns [`crate::AnalyticsError::Core`] wrapping an overflow when a
/// value or a total leaves the `Decimal` range.
///
/// # Example
///
/// ```rust
/// use folio_analytics::prelude::*;
/// use rust_decimal_macros::dec;
///
/// let holding = Holding::builder()
///     .asset_id(1)
///     .quantity(dec!(10))
///     .average_cost(dec!(100))
///     .asset(Asset::new("AAPL", "Apple Inc.", AssetType::Stock).with_price(dec!(150)))
///     .build()
///     .unwrap();
///
/// let metrics = calculate_performance(&[holding], &AnalyticsConfig::default()).unwrap();
/// assert_eq!(metrics.total_value, dec!(1500));
/// assert_eq!(metrics.total_gain_loss, dec!(500));
/// assert_eq!(metrics.total_gain_loss_percent, dec!(50));
/// ```
pub fn calculate_performance(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> AnalyticsResult<PerformanceMetrics> {
    let breakdown = maybe_parallel_map(holdings, config, evaluate_holding)
        .into_iter()
        .collect::<FolioResult<Vec<_>>>()?;

    let total_value = checked_total(breakdown.iter().map(|h| h.current_value), "total value")?;
    let total_cost = checked_total(breakdown.iter().map(|h| h.cost_basis), "total cost")?;
    let stale_holdings = breakdown.iter().filter(|h| h.price_stale).count();
    let total_gain_loss = total_value - total_cost;

    debug!(
        holdings = breakdown.len(),
        stale = stale_holdings,
        %total_value,
        %total_cost,
        "calculated portfolio performance"
    );

    Ok(PerformanceMetrics {
        total_value,
        total_cost,
        total_gain_loss,
        total_gain_loss_percent: percentage(total_gain_loss, total_cost),
        stale_holdings,
        holdings: breakdown,
    })
}
