//! Historical price series.
//!
//! - [`HistoricalRequest`]: what to fetch (symbol, period, interval)
//! - [`PriceHistory`]: what the provider returned
//! - [`normalize_series`]: latest price, daily and period change, and the
//!   display slice

mod request;
mod series;

pub use request::*;
pub use series::*;
