//! Holding representation: one portfolio position in one asset.

use super::Asset;
use crate::error::{FolioError, FolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A portfolio's position in a single asset.
///
/// The holding embeds a snapshot of its asset, as delivered by the data
/// layer. Current value, cost basis, and gain/loss are derived on demand and
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Identifier of the referenced asset.
    pub asset_id: u64,

    /// Units held (non-negative).
    pub quantity: Decimal,

    /// Average cost per unit (non-negative).
    pub average_cost: Decimal,

    /// The referenced asset.
    pub asset: Asset,
}

impl Holding {
    /// Creates a new holding builder.
    #[must_use]
    pub fn builder() -> HoldingBuilder {
        HoldingBuilder::new()
    }

    /// Returns the asset symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.asset.symbol
    }

    /// Returns quantity × current price, or `None` when the asset is unpriced.
    ///
    /// A holding that passed [`Holding::validate`] never overflows here.
    #[must_use]
    pub fn current_value(&self) -> Option<Decimal> {
        self.asset.current_price.map(|price| self.quantity * price)
    }

    /// Returns quantity × average cost.
    ///
    /// A holding that passed [`Holding::validate`] never overflows here.
    #[must_use]
    pub fn cost_basis(&self) -> Decimal {
        self.quantity * self.average_cost
    }

    /// Checked form of [`Holding::current_value`].
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Overflow`] when quantity × price leaves the
    /// `Decimal` range.
    pub fn try_current_value(&self) -> FolioResult<Option<Decimal>> {
        self.asset
            .current_price
            .map(|price| {
                self.quantity
                    .checked_mul(price)
                    .ok_or_else(|| FolioError::overflow(format!("value of {}", self.symbol())))
            })
            .transpose()
    }

    /// Checked form of [`Holding::cost_basis`].
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Overflow`] when quantity × average cost leaves
    /// the `Decimal` range.
    pub fn try_cost_basis(&self) -> FolioResult<Decimal> {
        self.quantity
            .checked_mul(self.average_cost)
            .ok_or_else(|| FolioError::overflow(format!("cost basis of {}", self.symbol())))
    }

    /// Returns true when the asset has no current price.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.asset.is_unpriced()
    }

    /// Checks quantity, cost, and the embedded asset.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidHolding`] for a negative quantity or
    /// average cost, [`FolioError::Overflow`] when value or cost basis does
    /// not fit in a `Decimal`, or the asset's own validation error.
    pub fn validate(&self) -> FolioResult<()> {
        self.asset.validate()?;

        if self.quantity < Decimal::ZERO {
            return Err(FolioError::invalid_holding(
                self.symbol(),
                "quantity cannot be negative",
            ));
        }

        if self.average_cost < Decimal::ZERO {
            return Err(FolioError::invalid_holding(
                self.symbol(),
                "average_cost cannot be negative",
            ));
        }

        self.try_current_value()?;
        self.try_cost_basis()?;

        Ok(())
    }
}

/// Builder for constructing a validated [`Holding`].
#[derive(Debug, Clone, Default)]
pub struct HoldingBuilder {
    asset_id: u64,
    quantity: Option<Decimal>,
    average_cost: Decimal,
    asset: Option<Asset>,
}

impl HoldingBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the asset identifier.
    #[must_use]
    pub fn asset_id(mut self, id: u64) -> Self {
        self.asset_id = id;
        self
    }

    /// Sets the quantity held.
    #[must_use]
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the average cost per unit.
    #[must_use]
    pub fn average_cost(mut self, cost: Decimal) -> Self {
        self.average_cost = cost;
        self
    }

    /// Sets the referenced asset.
    #[must_use]
    pub fn asset(mut self, asset: Asset) -> Self {
        self.asset = Some(asset);
        self
    }

    /// Builds the holding.
    ///
    /// # Errors
    ///
    /// Returns an error if the asset or quantity is missing, or if
    /// validation fails.
    pub fn build(self) -> FolioResult<Holding> {
        let asset = self
            .asset
            .ok_or_else(|| FolioError::missing_field("asset"))?;

        let quantity = self
            .quantity
            .ok_or_else(|| FolioError::missing_field("quantity"))?;

        let holding = Holding {
            asset_id: self.asset_id,
            quantity,
            average_cost: self.average_cost,
            asset,
        };
        holding.validate()?;

        Ok(holding)
    }
}
