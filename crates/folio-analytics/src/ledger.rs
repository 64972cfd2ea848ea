//! Transaction ledger: folding buys and sells into positions.
//!
//! Buys blend into a weighted average cost; sells reduce quantity at an
//! unchanged average cost and close the position at zero. Fees are recorded
//! on the transaction but do not enter the average cost.
//!
//! A position belongs to one portfolio: the same asset held in two
//! portfolios is two positions.

use folio_core::types::{Transaction, TransactionType};
use folio_core::{ratio, FolioError, FolioResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Identifies a position: one asset within one portfolio.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PositionKey {
    /// Owning portfolio.
    pub portfolio_id: u64,
    /// Asset held.
    pub asset_id: u64,
}

impl PositionKey {
    /// Creates a position key.
    #[must_use]
    pub fn new(portfolio_id: u64, asset_id: u64) -> Self {
        Self {
            portfolio_id,
            asset_id,
        }
    }

    /// Returns the key of the position a transaction applies to.
    #[must_use]
    pub fn of(txn: &Transaction) -> Self {
        Self::new(txn.portfolio_id, txn.asset_id)
    }
}

/// Quantity and average cost of an open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionState {
    /// Units held (positive).
    pub quantity: Decimal,
    /// Average cost per unit.
    pub average_cost: Decimal,
}

impl PositionState {
    /// Creates a position state.
    #[must_use]
    pub fn new(quantity: Decimal, average_cost: Decimal) -> Self {
        Self {
            quantity,
            average_cost,
        }
    }

    /// Returns quantity × average cost.
    #[must_use]
    pub fn cost_basis(&self) -> Decimal {
        self.quantity * self.average_cost
    }
}

/// Outcome of applying one transaction to a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionChange {
    /// A buy opened a new position.
    Opened(PositionState),
    /// A buy or partial sell changed an open position.
    Updated(PositionState),
    /// A sell disposed of every unit.
    Closed,
    /// The transaction does not move units.
    Unchanged(Option<PositionState>),
}

impl PositionChange {
    /// Returns the position after the change, `None` if there is none.
    #[must_use]
    pub fn position(&self) -> Option<PositionState> {
        match self {
            PositionChange::Opened(p) | PositionChange::Updated(p) => Some(*p),
            PositionChange::Closed => None,
            PositionChange::Unchanged(p) => *p,
        }
    }
}

/// Applies one transaction to the current position of its asset.
///
/// # Errors
///
/// Returns [`FolioError::InvalidTransaction`] for a non-positive quantity or
/// negative price or fees, and [`FolioError::InsufficientQuantity`] when a
/// sell exceeds the units held.
pub fn apply_transaction(
    current: Option<PositionState>,
    txn: &Transaction,
) -> FolioResult<PositionChange> {
    txn.validate()?;

    match txn.transaction_type {
        TransactionType::Buy => Ok(match current {
            None => PositionChange::Opened(PositionState::new(txn.quantity, txn.price)),
            Some(pos) => {
                let quantity = pos.quantity + txn.quantity;
                let total_cost = pos.cost_basis() + txn.quantity * txn.price;
                PositionChange::Updated(PositionState::new(
                    quantity,
                    ratio(total_cost, quantity, txn.price),
                ))
            }
        }),
        TransactionType::Sell => {
            let held = current.map_or(Decimal::ZERO, |p| p.quantity);
            if held < txn.quantity {
                return Err(FolioError::InsufficientQuantity {
                    asset_id: txn.asset_id,
                    held,
                    requested: txn.quantity,
                });
            }
            let remaining = held - txn.quantity;
            Ok(match current {
                Some(pos) if !remaining.is_zero() => {
                    PositionChange::Updated(PositionState::new(remaining, pos.average_cost))
                }
                _ => PositionChange::Closed,
            })
        }
        TransactionType::Dividend
        | TransactionType::Split
        | TransactionType::Deposit
        | TransactionType::Withdrawal => Ok(PositionChange::Unchanged(current)),
    }
}

/// Rebuilds open positions from a transaction log.
///
/// Transactions are applied in chronological order; equal timestamps keep
/// their input order. Positions are tracked per portfolio and asset, and
/// closed positions are absent from the result.
///
/// # Errors
///
/// Returns the first error raised by [`apply_transaction`].
pub fn replay_transactions(
    transactions: &[Transaction],
) -> FolioResult<BTreeMap<PositionKey, PositionState>> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|t| t.transaction_date);

    let mut positions: BTreeMap<PositionKey, PositionState> = BTreeMap::new();
    for txn in ordered {
        let key = PositionKey::of(txn);
        let current = positions.get(&key).copied();
        match apply_transaction(current, txn)?.position() {
            Some(pos) => {
                positions.insert(key, pos);
            }
            None => {
                positions.remove(&key);
            }
        }
    }

    debug!(
        transactions = transactions.len(),
        open_positions = positions.len(),
        "replayed transactions"
    );

    Ok(positions)
}
