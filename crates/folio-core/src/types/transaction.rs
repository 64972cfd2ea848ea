//! Portfolio transactions.

use crate::error::{FolioError, FolioResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of portfolio transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Purchase of units
    Buy,
    /// Sale of units
    Sell,
    /// Cash distribution
    Dividend,
    /// Share split
    Split,
    /// Cash deposit
    Deposit,
    /// Cash withdrawal
    Withdrawal,
}

impl TransactionType {
    /// Returns the lowercase wire token.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
            TransactionType::Dividend => "dividend",
            TransactionType::Split => "split",
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
        }
    }

    /// Returns true for transactions that change the units held.
    #[must_use]
    pub fn moves_units(&self) -> bool {
        matches!(self, TransactionType::Buy | TransactionType::Sell)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for TransactionType {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(TransactionType::Buy),
            "sell" => Ok(TransactionType::Sell),
            "dividend" => Ok(TransactionType::Dividend),
            "split" => Ok(TransactionType::Split),
            "deposit" => Ok(TransactionType::Deposit),
            "withdrawal" => Ok(TransactionType::Withdrawal),
            _ => Err(FolioError::unknown_token("transaction type", s)),
        }
    }
}

/// A recorded portfolio transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Owning portfolio.
    pub portfolio_id: u64,

    /// Asset the transaction applies to.
    pub asset_id: u64,

    /// Kind of transaction.
    pub transaction_type: TransactionType,

    /// Units transacted.
    pub quantity: Decimal,

    /// Price per unit.
    pub price: Decimal,

    /// Fees charged.
    #[serde(default)]
    pub fees: Decimal,

    /// Total cash amount as recorded by the caller.
    pub total_amount: Decimal,

    /// When the transaction executed.
    pub transaction_date: DateTime<Utc>,

    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Creates a transaction with `total_amount = quantity × price` and no fees.
    #[must_use]
    pub fn new(
        portfolio_id: u64,
        asset_id: u64,
        transaction_type: TransactionType,
        quantity: Decimal,
        price: Decimal,
        transaction_date: DateTime<Utc>,
    ) -> Self {
        Self {
            portfolio_id,
            asset_id,
            transaction_type,
            quantity,
            price,
            fees: Decimal::ZERO,
            total_amount: quantity * price,
            transaction_date,
            notes: None,
        }
    }

    /// Sets the fees.
    #[must_use]
    pub fn with_fees(mut self, fees: Decimal) -> Self {
        self.fees = fees;
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns quantity × price, before fees.
    #[must_use]
    pub fn gross_amount(&self) -> Decimal {
        self.quantity * self.price
    }

    /// Checks the numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidTransaction`] when the quantity is not
    /// positive or the price or fees are negative.
    pub fn validate(&self) -> FolioResult<()> {
        if self.quantity <= Decimal::ZERO {
            return Err(FolioError::invalid_transaction(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        if self.price < Decimal::ZERO {
            return Err(FolioError::invalid_transaction(format!(
                "price cannot be negative, got {}",
                self.price
            )));
        }
        if self.fees < Decimal::ZERO {
            return Err(FolioError::invalid_transaction(format!(
                "fees cannot be negative, got {}",
                self.fees
            )));
        }
        Ok(())
    }
}
