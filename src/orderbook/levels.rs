//! Aggregated resting quantity by price

use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Price to total resting quantity ledger.
///
/// Both sides of the book share one table. A buy and a sell can only rest at the
/// same price transiently, since a crossing order matches before it rests, so the
/// pooled table is equivalent to two per-side tables in practice. Entries are
/// removed as soon as their quantity reaches zero.
///
/// Totals are `u128` so that any number of `u64` orders resting at one price can
/// be summed exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceLevels {
    levels: BTreeMap<Decimal, u128>,
}

impl PriceLevels {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add resting quantity at `price`, creating the level if absent
    pub fn add(&mut self, price: Decimal, quantity: u64) {
        if quantity == 0 {
            return;
        }
        let total = self.levels.entry(price.normalize()).or_insert(0);
        *total = total.saturating_add(u128::from(quantity));
    }

    /// Remove quantity at `price`, deleting the level once it drops to zero
    pub fn remove(&mut self, price: Decimal, quantity: u64) {
        let price = price.normalize();
        if let Some(total) = self.levels.get_mut(&price) {
            *total = total.saturating_sub(u128::from(quantity));
            if *total == 0 {
                self.levels.remove(&price);
            }
        }
    }

    /// Aggregate quantity at `price`, zero if nothing rests there
    pub fn volume_at(&self, price: Decimal) -> u128 {
        self.levels.get(&price).copied().unwrap_or(0)
    }

    /// Every price carrying non-zero quantity, ascending
    pub fn prices(&self) -> Vec<Decimal> {
        self.levels.keys().copied().collect()
    }

    /// Iterate over `(price, quantity)` pairs, ascending by price
    pub fn iter(&self) -> impl Iterator<Item = (&Decimal, &u128)> {
        self.levels.iter()
    }

    /// Number of populated price levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True when nothing rests in the book
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Sum of every level
    pub fn total_quantity(&self) -> u128 {
        self.levels
            .values()
            .fold(0u128, |sum, quantity| sum.saturating_add(*quantity))
    }
}
