//! Value types delivered by the data layer.
//!
//! - [`Asset`] / [`AssetType`]: instrument identity, classification, price
//! - [`Holding`]: one position in one asset
//! - [`HistoricalBar`]: an OHLCV sample
//! - [`Period`] / [`Interval`]: historical request tokens
//! - [`Transaction`]: a buy, sell, or cash event

mod asset;
mod bar;
mod holding;
mod period;
mod transaction;

pub use asset::{Asset, AssetSummary, AssetType, DEFAULT_CURRENCY};
pub use bar::HistoricalBar;
pub use holding::{Holding, HoldingBuilder};
pub use period::{Interval, Period};
pub use transaction::{Transaction, TransactionType};
