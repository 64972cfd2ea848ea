//! Portfolio bucketing and classification.
//!
//! This module provides distribution views of portfolio value:
//!
//! - **Diversification**: share of value by asset type and by asset
//! - **Allocation**: value and share by asset type and by currency
//!
//! All functions are pure - they take holdings and return distributions
//! without modifying state.
//!
//! # Example
//!
//! ```rust
//! use folio_analytics::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let stock = Asset::new("AAPL", "Apple Inc.", AssetType::Stock).with_price(dec!(75));
//! let bond = Asset::new("BND", "Total Bond", AssetType::Bond).with_price(dec!(25));
//! let holdings: Vec<Holding> = [stock, bond]
//!     .into_iter()
//!     .map(|a| Holding::builder().quantity(dec!(1)).asset(a).build().unwrap())
//!     .collect();
//!
//! let div = calculate_diversification(&holdings, &AnalyticsConfig::default()).unwrap();
//! assert_eq!(div.type_weight(AssetType::Stock), dec!(75));
//! assert_eq!(div.by_asset[0].asset.symbol, "AAPL");
//! ```

mod allocation;
mod diversification;

pub use allocation::*;
pub use diversification::*;

use crate::analytics::maybe_parallel_map;
use crate::config::AnalyticsConfig;
use folio_core::types::Holding;
use folio_core::FolioResult;
use rust_decimal::Decimal;

/// Current value of every holding, 0 when unpriced, in input order.
fn parallel_values(holdings: &[Holding], config: &AnalyticsConfig) -> FolioResult<Vec<Decimal>> {
    maybe_parallel_map(holdings, config, |h| {
        h.try_current_value().map(|v| v.unwrap_or(Decimal::ZERO))
    })
    .into_iter()
    .collect()
}
