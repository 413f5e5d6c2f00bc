//! Order book error types

use std::fmt;

/// Errors that can occur within the OrderBook
///
/// The book itself never surfaces these through [`crate::OrderBook::submit`] or
/// [`crate::OrderBook::cancel`], which follow a silent-reject policy. They are
/// returned by the `try_` variants so callers can tell a rejection apart from an
/// accepted order that simply found no counterparty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// An order with this id is already live in the book
    DuplicateOrderId(String),

    /// Order not found in the book
    OrderNotFound(String),

    /// Quantity must be strictly positive
    InvalidQuantity {
        /// Id of the offending order
        order_id: String,
        /// Quantity that was supplied
        quantity: u64,
    },

    /// Price must be a finite, strictly positive number
    InvalidPrice {
        /// Id of the offending order
        order_id: String,
        /// Textual form of the price that was supplied
        price: String,
    },

    /// Configuration could not be loaded or failed validation
    InvalidConfig {
        /// Description of the error
        message: String,
    },

    /// Serialization or deserialization of book data failed
    SerializationError {
        /// Description of the error
        message: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::DuplicateOrderId(id) => write!(f, "Duplicate order id: {}", id),
            OrderBookError::OrderNotFound(id) => write!(f, "Order not found: {}", id),
            OrderBookError::InvalidQuantity { order_id, quantity } => {
                write!(f, "Invalid quantity for order {}: {}", order_id, quantity)
            }
            OrderBookError::InvalidPrice { order_id, price } => {
                write!(f, "Invalid price for order {}: {}", order_id, price)
            }
            OrderBookError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            OrderBookError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}

impl From<serde_json::Error> for OrderBookError {
    fn from(err: serde_json::Error) -> Self {
        OrderBookError::SerializationError {
            message: err.to_string(),
        }
    }
}
