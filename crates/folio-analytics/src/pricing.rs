//! Price refresh: applying fetched quotes to assets.

use chrono::{DateTime, Utc};
use folio_core::types::Asset;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Returns the assets with fresh quotes applied.
///
/// Tradeable assets with a positive quote for their symbol get the quote as
/// `current_price` and `as_of` as `last_updated`. Cash assets, assets without
/// a quote, and non-positive quotes leave the asset unchanged. Output order
/// matches input order.
#[must_use]
pub fn refresh_prices(
    assets: &[Asset],
    quotes: &HashMap<String, Decimal>,
    as_of: DateTime<Utc>,
) -> Vec<Asset> {
    let mut updated = 0usize;

    let refreshed = assets
        .iter()
        .map(|asset| {
            if !asset.asset_type.is_tradeable() {
                return asset.clone();
            }
            match quotes.get(&asset.symbol) {
                Some(price) if *price > Decimal::ZERO => {
                    updated += 1;
                    asset.with_quote(*price, as_of)
                }
                Some(price) => {
                    warn!(symbol = %asset.symbol, %price, "ignoring non-positive quote");
                    asset.clone()
                }
                None => asset.clone(),
            }
        })
        .collect();

    debug!(assets = assets.len(), updated, "refreshed prices");
    refreshed
}
