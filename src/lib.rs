//! # Single-Instrument Limit Order Matching Engine
//!
//! A deterministic, single-threaded limit order book for one instrument. Incoming
//! limit orders are matched against resting orders on the opposite side under
//! price priority, then arrival priority, and any unfilled remainder rests in the
//! book. The book keeps an aggregated view of outstanding liquidity by price.
//!
//! ## Key Features
//!
//! - **Price-Time Priority**: Each side of the book is a binary heap keyed by
//!   price priority and a book-assigned arrival sequence.
//!
//! - **Lazy Cancellation**: Cancelling an order removes it from the order index and
//!   the price-level ledger in `O(log n)`. The heap entry is left behind as a
//!   tombstone and discarded the next time it reaches the head of its queue.
//!
//! - **Handles, Not Copies**: Queue entries are lightweight handles (order id plus
//!   arrival sequence) into a single order index. The index is the only place an
//!   order's remaining quantity lives, so the queue can never disagree with it.
//!
//! - **Mid-Point Execution**: Every fill executes at the arithmetic mean of the two
//!   limit prices. Prices are `rust_decimal::Decimal`, so the mean is exact.
//!
//! - **Aggregated Price Levels**: A single price to quantity ledger, pooled across
//!   both sides, always equal to the sum of the live orders resting at each price.
//!
//! ## Submission Semantics
//!
//! [`OrderBook::submit`] follows a silent-reject policy: a duplicate live id, a zero
//! quantity or a non-positive price leaves the book untouched and returns an empty
//! trade list. An empty list therefore means either "rejected" or "accepted and
//! resting with no counterparty yet". Callers that need to tell these apart use
//! [`OrderBook::try_submit`], which returns a [`MatchResult`] or an
//! [`OrderBookError`].
//!
//! ## Example
//!
//! ```rust
//! use lob_engine::{Order, OrderBook, Side};
//! use rust_decimal::Decimal;
//!
//! let mut book = OrderBook::new("BTC/USD");
//!
//! book.submit(Order::new("s1", Side::Sell, Decimal::from(10), 5));
//! assert_eq!(book.volume_at(Decimal::from(10)), 5);
//!
//! let trades = book.submit(Order::new("b1", Side::Buy, Decimal::from(10), 5));
//! assert_eq!(trades.len(), 1);
//! assert_eq!(trades[0].price, Decimal::from(10));
//! assert_eq!(trades[0].quantity, 5);
//! assert!(book.price_levels().is_empty());
//! ```
//!
//! ## Threading
//!
//! The book is a plain single-threaded state container. Mutating operations take
//! `&mut self` and run to completion; callers that share a book across threads
//! must wrap it in their own mutual-exclusion primitive.

pub mod orderbook;

mod utils;

pub use orderbook::{
    LevelSnapshot, MatchResult, Order, OrderBook, OrderBookConfig, OrderBookError,
    OrderBookSnapshot, OrderId, Side, Trade, TradeListener, parse_price,
};
pub use utils::{TradeIdGenerator, current_time_millis, parse_log_level, setup_logger};
