//! Asset identity, classification, and current price.

use crate::error::{FolioError, FolioResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency assumed when an asset does not carry one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Asset classification.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Listed equity
    #[default]
    Stock,
    /// Fixed income security
    Bond,
    /// Exchange-traded fund
    Etf,
    /// Cash balance (no market price)
    Cash,
    /// Crypto currency
    Crypto,
    /// Physical commodity or commodity fund
    Commodity,
}

impl AssetType {
    /// Returns the lowercase wire token.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Bond => "bond",
            AssetType::Etf => "etf",
            AssetType::Cash => "cash",
            AssetType::Crypto => "crypto",
            AssetType::Commodity => "commodity",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Stock => "Stock",
            AssetType::Bond => "Bond",
            AssetType::Etf => "ETF",
            AssetType::Cash => "Cash",
            AssetType::Crypto => "Crypto",
            AssetType::Commodity => "Commodity",
        }
    }

    /// Returns true if the asset has a market price that can be refreshed.
    ///
    /// Cash balances are carried at a fixed price and are never quoted.
    #[must_use]
    pub fn is_tradeable(&self) -> bool {
        !matches!(self, AssetType::Cash)
    }

    /// All asset types in declaration order.
    #[must_use]
    pub fn all() -> &'static [AssetType] {
        &[
            AssetType::Stock,
            AssetType::Bond,
            AssetType::Etf,
            AssetType::Cash,
            AssetType::Crypto,
            AssetType::Commodity,
        ]
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AssetType {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        AssetType::all()
            .iter()
            .copied()
            .find(|t| t.code() == token)
            .ok_or_else(|| FolioError::unknown_token("asset type", s))
    }
}

/// A tradeable instrument (or cash balance) as delivered by the data layer.
///
/// Identity (symbol, name, type) never changes. `current_price` and
/// `last_updated` change only through [`Asset::with_quote`], which returns a
/// new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Ticker symbol (e.g. "AAPL").
    pub symbol: String,

    /// Display name.
    pub name: String,

    /// Classification.
    pub asset_type: AssetType,

    /// Listing exchange, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,

    /// ISO currency code, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Latest known price per unit. `None` until the first price refresh.
    #[serde(default)]
    pub current_price: Option<Decimal>,

    /// When `current_price` was last refreshed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Asset {
    /// Creates an unpriced asset.
    #[must_use]
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, asset_type: AssetType) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            asset_type,
            exchange: None,
            currency: None,
            current_price: None,
            last_updated: None,
        }
    }

    /// Sets the exchange.
    #[must_use]
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// Sets the currency code.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the current price without touching `last_updated`.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Returns a copy carrying a refreshed quote.
    #[must_use]
    pub fn with_quote(&self, price: Decimal, as_of: DateTime<Utc>) -> Self {
        Self {
            current_price: Some(price),
            last_updated: Some(as_of),
            ..self.clone()
        }
    }

    /// Returns the currency code, falling back to [`DEFAULT_CURRENCY`].
    #[must_use]
    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// Returns true if the asset has no current price.
    #[must_use]
    pub fn is_unpriced(&self) -> bool {
        self.current_price.is_none()
    }

    /// Checks identity and price fields.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidAsset`] for an empty symbol or a negative
    /// price.
    pub fn validate(&self) -> FolioResult<()> {
        if self.symbol.trim().is_empty() {
            return Err(FolioError::invalid_asset(&self.symbol, "symbol is empty"));
        }
        if let Some(price) = self.current_price {
            if price < Decimal::ZERO {
                return Err(FolioError::invalid_asset(
                    &self.symbol,
                    format!("negative price {price}"),
                ));
            }
        }
        Ok(())
    }

    /// Returns the identity fields used in analytics output.
    #[must_use]
    pub fn summary(&self) -> AssetSummary {
        AssetSummary {
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            asset_type: self.asset_type,
        }
    }
}

/// Identity of an asset as it appears in analytics output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetSummary {
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Classification.
    pub asset_type: AssetType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_asset_type_tokens() {
        for t in AssetType::all() {
            assert_eq!(t.code().parse::<AssetType>().unwrap(), *t);
        }
        assert_eq!(" ETF ".parse::<AssetType>().unwrap(), AssetType::Etf);
        assert!("warrant".parse::<AssetType>().is_err());
    }

    #[test]
    fn test_asset_type_serde_lowercase() {
        let json = serde_json::to_string(&AssetType::Etf).unwrap();
        assert_eq!(json, "\"etf\"");
        let parsed: AssetType = serde_json::from_str("\"commodity\"").unwrap();
        assert_eq!(parsed, AssetType::Commodity);
    }

    #[test]
    fn test_cash_not_tradeable() {
        assert!(!AssetType::Cash.is_tradeable());
        assert!(AssetType::Stock.is_tradeable());
        assert!(AssetType::Crypto.is_tradeable());
    }

    #[test]
    fn test_currency_default() {
        let asset = Asset::new("VTI", "Vanguard Total Market", AssetType::Etf);
        assert_eq!(asset.currency_code(), "USD");
        assert_eq!(asset.with_currency("EUR").currency_code(), "EUR");
    }

    #[test]
    fn test_with_quote_keeps_identity() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 16, 0, 0).unwrap();
        let asset = Asset::new("AAPL", "Apple Inc.", AssetType::Stock).with_exchange("NASDAQ");
        let quoted = asset.with_quote(dec!(182.5), at);

        assert_eq!(quoted.symbol, "AAPL");
        assert_eq!(quoted.exchange.as_deref(), Some("NASDAQ"));
        assert_eq!(quoted.current_price, Some(dec!(182.5)));
        assert_eq!(quoted.last_updated, Some(at));
        assert!(asset.is_unpriced());
    }

    #[test]
    fn test_validate() {
        let apple = Asset::new("AAPL", "Apple", AssetType::Stock);
        assert!(apple.validate().is_ok());
        let blank = Asset::new("  ", "Blank", AssetType::Stock);
        assert!(blank.validate().is_err());

        let negative = Asset::new("BAD", "Bad", AssetType::Stock).with_price(dec!(-1));
        assert!(matches!(
            negative.validate(),
            Err(FolioError::InvalidAsset { .. })
        ));

        let zero = Asset::new("ZERO", "Zero", AssetType::Stock).with_price(dec!(0));
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_deserialize_minimal() {
        let json = r#"{"symbol":"BND","name":"Total Bond","asset_type":"bond"}"#;
        let asset: Asset = serde_json::from_str(json).unwrap();
        assert_eq!(asset.asset_type, AssetType::Bond);
        assert!(asset.current_price.is_none());
        assert!(asset.exchange.is_none());
    }
}
