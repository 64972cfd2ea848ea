//! # Folio Analytics
//!
//! Portfolio performance, diversification, and price history analytics.
//!
//! This crate derives the figures a portfolio tracker displays from data the
//! caller has already fetched: holdings with their assets' current prices,
//! transaction logs, and raw price bars.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Never fail on arithmetic**: zero denominators yield 0, unpriced
//!   holdings are valued at 0 and flagged as stale
//! - **Deterministic output**: input order preserved, ordered maps for
//!   grouped views, fixed tie-breaks
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Features
//!
//! - **Performance**: per-holding and total value, cost basis, gain/loss
//! - **Diversification**: share of value by asset type and by asset
//! - **Allocation**: value and share by asset type and by currency
//! - **Position Summary**: totals and price statistics over priced holdings
//! - **Historical Series**: latest price, daily and period change, capped
//!   newest-first display slice
//! - **Ledger**: weighted average cost on buys, replay of transaction logs
//! - **Price Refresh**: quotes applied to tradeable assets
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_analytics::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let holdings = vec![
//!     Holding::builder()
//!         .asset_id(1)
//!         .quantity(dec!(10))
//!         .average_cost(dec!(150))
//!         .asset(Asset::new("AAPL", "Apple Inc.", AssetType::Stock).with_price(dec!(180)))
//!         .build()
//!         .unwrap(),
//!     Holding::builder()
//!         .asset_id(2)
//!         .quantity(dec!(20))
//!         .average_cost(dec!(80))
//!         .asset(Asset::new("BND", "Total Bond", AssetType::Bond).with_price(dec!(75)))
//!         .build()
//!         .unwrap(),
//! ];
//!
//! let config = AnalyticsConfig::default();
//! let performance = calculate_performance(&holdings, &config).unwrap();
//! let diversification = calculate_diversification(&holdings, &config).unwrap();
//!
//! assert_eq!(performance.total_value, dec!(3300));
//! assert_eq!(performance.total_gain_loss, dec!(200));
//! assert_eq!(diversification.by_asset[0].asset.symbol, "AAPL");
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - Performance, position summary, parallel helpers
//! - [`bucketing`] - Diversification and allocation
//! - [`history`] - Historical requests and series normalization
//! - [`ledger`] - Transaction folding and replay
//! - [`pricing`] - Price refresh
//! - [`config`] - Analytics configuration
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod bucketing;
pub mod config;
pub mod error;
pub mod history;
pub mod ledger;
pub mod pricing;

pub use config::AnalyticsConfig;
pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::{
        calculate_performance, calculate_position_summary, evaluate_holding, HoldingPerformance,
        PerformanceMetrics, PositionSummary, PriceStatistics,
    };
    pub use crate::bucketing::{
        calculate_allocation, calculate_diversification, AllocationBreakdown, AllocationSlice,
        AssetWeight, DiversificationData,
    };
    pub use crate::config::AnalyticsConfig;
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::history::{normalize_series, HistoricalRequest, HistoricalSeries, PriceHistory};
    pub use crate::ledger::{
        apply_transaction, replay_transactions, PositionChange, PositionKey, PositionState,
    };
    pub use crate::pricing::refresh_prices;

    pub use folio_core::prelude::*;
}
