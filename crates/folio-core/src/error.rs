//! Error types for the Folio core types.
//!
//! Construction and validation of assets, holdings, and transactions report
//! failures through [`FolioError`]. Zero denominators never fail; they are
//! handled by [`crate::ratio`]. Products and sums that leave the `Decimal`
//! range are reported as [`FolioError::Overflow`].

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Folio core operations.
pub type FolioResult<T> = Result<T, FolioError>;

/// The main error type for Folio core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FolioError {
    /// Asset data failed validation.
    #[error("Invalid asset '{symbol}': {reason}")]
    InvalidAsset {
        /// Symbol of the offending asset.
        symbol: String,
        /// Why the asset is invalid.
        reason: String,
    },

    /// Holding data failed validation.
    #[error("Invalid holding '{symbol}': {reason}")]
    InvalidHolding {
        /// Symbol of the asset the holding references.
        symbol: String,
        /// Why the holding is invalid.
        reason: String,
    },

    /// Transaction data failed validation.
    #[error("Invalid transaction: {reason}")]
    InvalidTransaction {
        /// Why the transaction is invalid.
        reason: String,
    },

    /// A sell asked for more units than the position holds.
    #[error("Insufficient holdings to sell asset {asset_id}: held {held}, requested {requested}")]
    InsufficientQuantity {
        /// Asset the sell referenced.
        asset_id: u64,
        /// Quantity currently held.
        held: Decimal,
        /// Quantity the sell asked for.
        requested: Decimal,
    },

    /// A request token (period, interval, asset type, ...) was not recognized.
    #[error("Unknown {kind} '{token}'")]
    UnknownToken {
        /// What kind of token was being parsed.
        kind: &'static str,
        /// The rejected input.
        token: String,
    },

    /// A product or sum exceeded the range of `Decimal`.
    #[error("Arithmetic overflow computing {operation}")]
    Overflow {
        /// What was being computed.
        operation: String,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },
}

impl FolioError {
    /// Create an invalid asset error.
    #[must_use]
    pub fn invalid_asset(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid transaction error.
    #[must_use]
    pub fn invalid_transaction(reason: impl Into<String>) -> Self {
        Self::InvalidTransaction {
            reason: reason.into(),
        }
    }

    /// Create an unknown token error.
    #[must_use]
    pub fn unknown_token(kind: &'static str, token: impl Into<String>) -> Self {
        Self::UnknownToken {
            kind,
            token: token.into(),
        }
    }

    /// Create an arithmetic overflow error.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
