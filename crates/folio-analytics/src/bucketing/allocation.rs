//! Allocation of priced holdings by asset type and by currency.

use crate::analytics::maybe_parallel_filter_map;
use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use folio_core::types::{AssetType, Holding};
use folio_core::{checked_total, percentage, FolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Value and share of total for one allocation bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Current value in the bucket.
    pub value: Decimal,
    /// Share of total value (0-100).
    pub percentage: Decimal,
}

/// Allocation of portfolio value by asset type and by currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllocationBreakdown {
    /// Total value of priced holdings.
    pub total_value: Decimal,

    /// Allocation by asset type.
    pub by_asset_type: BTreeMap<AssetType, AllocationSlice>,

    /// Allocation by currency code.
    pub by_currency: BTreeMap<String, AllocationSlice>,
}

impl AllocationBreakdown {
    /// Returns true if no priced holdings contributed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_asset_type.is_empty()
    }

    /// Returns the currency holding the largest value, if any.
    #[must_use]
    pub fn dominant_currency(&self) -> Option<&str> {
        self.by_currency
            .iter()
            .max_by(|a, b| a.1.value.cmp(&b.1.value).then(b.0.cmp(a.0)))
            .map(|(code, _)| code.as_str())
    }
}

fn slices<K: Ord>(values: BTreeMap<K, Decimal>, total: Decimal) -> BTreeMap<K, AllocationSlice> {
    values
        .into_iter()
        .map(|(k, value)| {
            (
                k,
                AllocationSlice {
                    value,
                    percentage: percentage(value, total),
                },
            )
        })
        .collect()
}

/// Calculates allocation by asset type and by currency.
///
/// Only priced holdings contribute. Holdings without a currency are grouped
/// under `config.default_currency`.
///
/// # Errors
///
/// Returns [`crate::AnalyticsError::Core`] wrapping an overflow when a
/// value or the total leaves the `Decimal` range.
pub fn calculate_allocation(
    holdings: &[Holding],
    config: &AnalyticsConfig,
) -> AnalyticsResult<AllocationBreakdown> {
    let priced = maybe_parallel_filter_map(holdings, config, |h| {
        h.try_current_value()
            .map(|value| value.map(|v| (h.asset.asset_type, h.asset.currency.clone(), v)))
            .transpose()
    })
    .into_iter()
    .collect::<FolioResult<Vec<_>>>()?;

    let total_value = checked_total(priced.iter().map(|(_, _, v)| *v), "total value")?;
    if total_value.is_zero() {
        return Ok(AllocationBreakdown::default());
    }

    let mut by_type: BTreeMap<AssetType, Decimal> = BTreeMap::new();
    let mut by_currency: BTreeMap<String, Decimal> = BTreeMap::new();
    for (asset_type, currency, value) in &priced {
        *by_type.entry(*asset_type).or_default() += *value;
        let currency = currency
            .clone()
            .unwrap_or_else(|| config.default_currency.clone());
        *by_currency.entry(currency).or_default() += *value;
    }

    debug!(
        priced = priced.len(),
        currencies = by_currency.len(),
        %total_value,
        "calculated allocation"
    );

    Ok(AllocationBreakdown {
        total_value,
        by_asset_type: slices(by_type, total_value),
        by_currency: slices(by_currency, total_value),
    })
}
