//! Order book snapshot for market data

use super::error::OrderBookError;
use super::matching::execution_price;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Aggregated view of one price on one side of the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// Price of the level
    pub price: Decimal,
    /// Total resting quantity
    pub quantity: u128,
    /// Number of live orders at this price
    pub order_count: usize,
}

/// A snapshot of the order book state at a specific point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Bid levels, best (highest) first
    pub bids: Vec<LevelSnapshot>,

    /// Ask levels, best (lowest) first
    pub asks: Vec<LevelSnapshot>,
}

impl OrderBookSnapshot {
    /// Get the best bid price and quantity
    pub fn best_bid(&self) -> Option<(Decimal, u128)> {
        let bid = self.bids.first().map(|level| (level.price, level.quantity));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and quantity
    pub fn best_ask(&self) -> Option<(Decimal, u128)> {
        let ask = self.asks.first().map(|level| (level.price, level.quantity));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        let mid_price = match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some(execution_price(bid_price, ask_price))
            }
            _ => None,
        };
        trace!("mid_price: {:?}", mid_price);
        mid_price
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Decimal> {
        let spread = match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => Some(ask_price - bid_price),
            _ => None,
        };
        trace!("spread: {:?}", spread);
        spread
    }

    /// Calculate the total volume on the bid side
    pub fn total_bid_volume(&self) -> u128 {
        total_volume(&self.bids)
    }

    /// Calculate the total volume on the ask side
    pub fn total_ask_volume(&self) -> u128 {
        total_volume(&self.asks)
    }

    /// Calculate the total value on the bid side (price * quantity), or `None`
    /// if it exceeds the range of `Decimal`
    pub fn total_bid_value(&self) -> Option<Decimal> {
        total_value(&self.bids)
    }

    /// Calculate the total value on the ask side (price * quantity), or `None`
    /// if it exceeds the range of `Decimal`
    pub fn total_ask_value(&self) -> Option<Decimal> {
        total_value(&self.asks)
    }

    /// Serialize the snapshot to JSON
    pub fn to_json(&self) -> Result<String, OrderBookError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self, OrderBookError> {
        Ok(serde_json::from_str(json)?)
    }
}

fn total_volume(levels: &[LevelSnapshot]) -> u128 {
    levels
        .iter()
        .fold(0u128, |sum, level| sum.saturating_add(level.quantity))
}

fn total_value(levels: &[LevelSnapshot]) -> Option<Decimal> {
    levels.iter().try_fold(Decimal::ZERO, |sum, level| {
        let quantity = Decimal::from_u128(level.quantity)?;
        sum.checked_add(level.price.checked_mul(quantity)?)
    })
}
