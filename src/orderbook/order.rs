//! Order, side and order identifier types

use crate::orderbook::error::OrderBookError;
use crate::utils::current_time_millis;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Side of an order in the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy side (bids)
    Buy,
    /// Sell side (asks)
    Sell,
}

impl Side {
    /// The side an order of this side matches against
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Opaque, caller-chosen order identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn new_uuid() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A simple limit order.
///
/// Once submitted the book owns the order and reduces `quantity` in place as it
/// is filled. Time priority is not taken from `timestamp`: the book assigns its
/// own arrival sequence on submission.
///
/// Quantities are whole units (`u64`). Fractional sizes are not representable;
/// callers trading in fractions should scale to the smallest lot first, e.g.
/// express 0.001 BTC lots as integer counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-chosen identifier, unique among live orders
    pub id: OrderId,
    /// Buy or sell
    pub side: Side,
    /// Limit price
    pub price: Decimal,
    /// Remaining quantity in whole units
    pub quantity: u64,
    /// Creation time in milliseconds since epoch
    pub timestamp: u64,
}

impl Order {
    /// Create a new limit order stamped with the current time
    pub fn new(id: impl Into<OrderId>, side: Side, price: Decimal, quantity: u64) -> Self {
        Self {
            id: id.into(),
            side,
            price: price.normalize(),
            quantity,
            timestamp: current_time_millis(),
        }
    }

    /// Create a limit order from a floating point price, rejecting NaN, infinities,
    /// values outside the decimal range and non-positive prices.
    pub fn try_from_f64(
        id: impl Into<OrderId>,
        side: Side,
        price: f64,
        quantity: u64,
    ) -> Result<Self, OrderBookError> {
        let id = id.into();
        let price = parse_price(&id, price)?;
        Ok(Self::new(id, side, price, quantity))
    }

    /// Check the order is acceptable input for the book
    pub fn validate(&self) -> Result<(), OrderBookError> {
        if self.quantity == 0 {
            return Err(OrderBookError::InvalidQuantity {
                order_id: self.id.to_string(),
                quantity: self.quantity,
            });
        }
        if self.price <= Decimal::ZERO {
            return Err(OrderBookError::InvalidPrice {
                order_id: self.id.to_string(),
                price: self.price.to_string(),
            });
        }
        Ok(())
    }

    /// Whether this order's limit allows trading against a resting order at `price`
    pub fn accepts(&self, price: Decimal) -> bool {
        match self.side {
            Side::Buy => self.price >= price,
            Side::Sell => self.price <= price,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}@{}",
            self.id, self.side, self.quantity, self.price
        )
    }
}

/// Convert a floating point price into a book price.
pub fn parse_price(order_id: &OrderId, price: f64) -> Result<Decimal, OrderBookError> {
    let invalid = || OrderBookError::InvalidPrice {
        order_id: order_id.to_string(),
        price: price.to_string(),
    };

    if !price.is_finite() {
        return Err(invalid());
    }
    let decimal = Decimal::try_from(price).map_err(|_| invalid())?;
    if decimal <= Decimal::ZERO {
        return Err(invalid());
    }
    Ok(decimal.normalize())
}
