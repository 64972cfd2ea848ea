//! Diversification by asset type and by individual asset.

use super::parallel_values;
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use folio_core::types::{AssetSummary, AssetType, Holding};
use folio_core::{checked_total, percentage};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Value and share of total for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetWeight {
    /// Identity of the asset.
    pub asset: AssetSummary,

    /// Current value of the holding (0 when unpriced).
    pub value: Decimal,

    /// Share of total value (0-100).
    pub percentage: Decimal,
}

/// Distribution of portfolio value across asset types and assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiversificationData {
    /// Total current value.
    pub total_value: Decimal,

    /// Share of total value by asset type (0-100).
    pub by_asset_type: BTreeMap<AssetType, Decimal>,

    /// Per-asset weights, by descending value then ascending symbol.
    pub by_asset: Vec<AssetWeight>,
}

impl DiversificationData {
    /// Returns the share of total value held in `asset_type`.
    #[must_use]
    pub fn type_weight(&self, asset_type: AssetType) -> Decimal {
        self.by_asset_type
            .get(&asset_type)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the asset types sorted by weight descending.
    #[must_use]
    pub fn sorted_by_weight(&self) -> Vec<(AssetType, Decimal)> {
        let mut result: Vec<_> = self.by_asset_type.iter().map(|(t, w)| (*t, *w)).collect();
        result.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        result
    }

    /// Returns the largest `n` asset weights.
    #[must_use]
    pub fn top(&self, n: usize) -> &[AssetWeight] {
        &self.by_asset[..n.min(self.by_asset.len())]
    }

    /// Returns true if there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_asset.is_empty()
    }
}

/// Orders weights by descending value, ties by ascending symbol.
fn by_value_then_symbol(a: &AssetWeight, b: &AssetWeight) -> Ordering {
    b.value
        .cmp(&a.value)
        .then_with(|| a.asset.symbol.cmp(&b.asset.symbol))
}

/// Calculates the diversification breakdown of a set of holdings.
///
/// Unpriced holdings contribute 0-valued entries. When the total value is
/// zero every percentage is zero.
///
/// # Errors
///
/// Returns [`crate::AnalyticsError::Core`] wrapping an overflow when a
/// value or the total leaves the `Decimal` range.
pub fn calculate_diversification(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> AnalyticsResult<DiversificationData> {
    if holdings.is_empty() {
        return Ok(DiversificationData::default());
    }

    let values = parallel_values(holdings, config)?;
    let total_value = checked_total(values.iter().copied(), "total value")?;

    // values are non-negative, so group sums stay within the checked total
    let mut type_values: BTreeMap<AssetType, Decimal> = BTreeMap::new();
    for (h, value) in holdings.iter().zip(&values) {
        *type_values.entry(h.asset.asset_type).or_default() += *value;
    }

    let by_asset_type = type_values
        .into_iter()
        .map(|(t, value)| (t, percentage(value, total_value)))
        .collect();

    let mut by_asset: Vec<AssetWeight> = holdings
        .iter()
        .zip(values)
        .map(|(h, value)| AssetWeight {
            asset: h.asset.summary(),
            value,
            percentage: percentage(value, total_value),
        })
        .collect();
    by_asset.sort_by(by_value_then_symbol);

    debug!(
        holdings = holdings.len(),
        %total_value,
        "calculated diversification"
    );

    Ok(DiversificationData {
        total_value,
        by_asset_type,
        by_asset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::types::Asset;
    use rust_decimal_macros::dec;

    fn holding(symbol: &str, t: AssetType, qty: Decimal, price: Option<Decimal>) -> Holding {
        let mut asset = Asset::new(symbol, symbol, t);
        asset.current_price = price;
        Holding::builder()
            .quantity(qty)
            .average_cost(dec!(1))
            .asset(asset)
            .build()
            .unwrap()
    }

    #[test]
    fn test_by_type_and_asset() {
        let holdings = vec![
            holding("AAPL", AssetType::Stock, dec!(10), Some(dec!(30))),
            holding("BND", AssetType::Bond, dec!(10), Some(dec!(50))),
            holding("MSFT", AssetType::Stock, dec!(4), Some(dec!(50))),
        ];
        let div = calculate_diversification(&holdings, &AnalyticsConfig::default()).unwrap();

        assert_eq!(div.total_value, dec!(1000));
        assert_eq!(div.type_weight(AssetType::Stock), dec!(50));
        assert_eq!(div.type_weight(AssetType::Bond), dec!(50));
        assert_eq!(div.type_weight(AssetType::Cash), Decimal::ZERO);

        let order: Vec<_> = div
            .by_asset
            .iter()
            .map(|w| w.asset.symbol.as_str())
            .collect();
        assert_eq!(order, vec!["BND", "AAPL", "MSFT"]);
        assert_eq!(div.by_asset[0].percentage, dec!(50));
        assert_eq!(div.by_asset[2].percentage, dec!(20));
    }

    #[test]
    fn test_equal_values_sort_by_symbol() {
        let holdings = vec![
            holding("ZZZ", AssetType::Etf, dec!(1), Some(dec!(100))),
            holding("AAA", AssetType::Etf, dec!(2), Some(dec!(50))),
            holding("MMM", AssetType::Etf, dec!(4), Some(dec!(25))),
        ];
        let div = calculate_diversification(&holdings, &AnalyticsConfig::default()).unwrap();
        let order: Vec<_> = div
            .by_asset
            .iter()
            .map(|w| w.asset.symbol.as_str())
            .collect();
        assert_eq!(order, vec!["AAA", "MMM", "ZZZ"]);
    }

    #[test]
    fn test_stale_holding_has_zero_entry() {
        let holdings = vec![
            holding("AAPL", AssetType::Stock, dec!(1), Some(dec!(100))),
            holding("NEW", AssetType::Crypto, dec!(3), None),
        ];
        let div = calculate_diversification(&holdings, &AnalyticsConfig::default()).unwrap();
        assert_eq!(div.by_asset.len(), 2);
        assert_eq!(div.by_asset[1].asset.symbol, "NEW");
        assert_eq!(div.by_asset[1].value, Decimal::ZERO);
        assert_eq!(div.type_weight(AssetType::Crypto), Decimal::ZERO);
        assert_eq!(div.type_weight(AssetType::Stock), dec!(100));
    }

    #[test]
    fn test_zero_total_value() {
        let holdings = vec![holding("NEW", AssetType::Stock, dec!(3), None)];
        let div = calculate_diversification(&holdings, &AnalyticsConfig::default()).unwrap();
        assert_eq!(div.total_value, Decimal::ZERO);
        assert!(div.by_asset.iter().all(|w| w.percentage.is_zero()));
    }

    #[test]
    fn test_empty() {
        let div = calculate_diversification(&[], &AnalyticsConfig::default()).unwrap();
        assert!(div.is_empty());
        assert!(div.by_asset_type.is_empty());
        assert!(div.top(3).is_empty());
    }

    #[test]
    fn test_sorted_by_weight() {
        let holdings = vec![
            holding("BND", AssetType::Bond, dec!(1), Some(dec!(25))),
            holding("AAPL", AssetType::Stock, dec!(1), Some(dec!(75))),
        ];
        let div = calculate_diversification(&holdings, &AnalyticsConfig::default()).unwrap();
        let sorted = div.sorted_by_weight();
        assert_eq!(sorted[0], (AssetType::Stock, dec!(75)));
        assert_eq!(sorted[1], (AssetType::Bond, dec!(25)));
    }
}
