//! # Folio Core
//!
//! Core value types, errors, and arithmetic primitives for the Folio
//! portfolio analytics library.
//!
//! This crate provides the building blocks used by `folio-analytics`:
//!
//! - **Types**: `Asset`, `Holding`, `HistoricalBar`, `Transaction`, and the
//!   `Period` / `Interval` request tokens
//! - **Safe ratio**: a single zero-denominator policy for every percentage
//! - **Display**: signed percentages and currency-formatted amounts
//!
//! ## Design Philosophy
//!
//! - **Value objects**: constructed fresh per request, never mutated
//! - **Validate at construction**: builders reject negative quantities and
//!   prices; arithmetic assumes validated input
//! - **Decimal money**: all monetary values use `rust_decimal::Decimal`
//!
//! ## Example
//!
//! ```rust
//! use folio_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let asset = Asset::new("AAPL", "Apple Inc.", AssetType::Stock).with_price(dec!(175));
//! let holding = Holding::builder()
//!     .asset_id(1)
//!     .quantity(dec!(10))
//!     .average_cost(dec!(150))
//!     .asset(asset)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(holding.current_value(), Some(dec!(1750)));
//! assert_eq!(percentage(dec!(300), holding.cost_basis()), dec!(20));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]

pub mod display;
pub mod error;
mod ratio;
pub mod types;

pub use error::{FolioError, FolioResult};
pub use ratio::{checked_total, percent_change, percentage, ratio};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::display::{format_money, format_signed_percent, ChangeDirection};
    pub use crate::error::{FolioError, FolioResult};
    pub use crate::ratio::{checked_total, percent_change, percentage, ratio};
    pub use crate::types::{
        Asset, AssetSummary, AssetType, HistoricalBar, Holding, HoldingBuilder, Interval, Period,
        Transaction, TransactionType, DEFAULT_CURRENCY,
    };
}
