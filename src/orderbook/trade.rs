//! Trade records and the outcome of matching an incoming order

use crate::orderbook::order::{OrderId, Side};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single execution between an incoming (taker) order and a resting (maker) order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique id of this execution
    pub trade_id: Uuid,
    /// Execution price, the mean of the two limit prices
    pub price: Decimal,
    /// Executed quantity
    pub quantity: u64,
    /// The incoming order
    pub taker_order_id: OrderId,
    /// The resting order
    pub maker_order_id: OrderId,
    /// Side of the incoming order
    pub taker_side: Side,
    /// Execution time in milliseconds since epoch
    pub timestamp: u64,
}

impl Trade {
    /// Price times quantity, or `None` if it exceeds the range of `Decimal`
    pub fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Result of submitting an order to the book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The incoming order
    pub order_id: OrderId,
    /// Executions, in the order they happened
    pub trades: Vec<Trade>,
    /// Quantity left after matching; this is what rests in the book
    pub remaining_quantity: u64,
    /// True when the order was completely filled
    pub is_complete: bool,
}

impl MatchResult {
    /// Start a result for an order of `quantity`
    pub fn new(order_id: OrderId, quantity: u64) -> Self {
        Self {
            order_id,
            trades: Vec::new(),
            remaining_quantity: quantity,
            is_complete: false,
        }
    }

    /// Record an execution
    pub fn add_trade(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    /// Total quantity executed across all trades
    pub fn executed_quantity(&self) -> u64 {
        self.trades.iter().map(|trade| trade.quantity).sum()
    }

    /// Whether an unfilled remainder was left resting in the book
    pub fn is_resting(&self) -> bool {
        self.remaining_quantity > 0
    }
}
