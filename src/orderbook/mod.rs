//! OrderBook implementation for a single instrument: priority queues, matching and
//! the aggregated price-level ledger.

pub mod book;
mod config;
mod error;
mod levels;
mod operations;
mod order;
mod private;
mod queue;
mod snapshot;
mod trade;

pub mod matching;

pub use book::{OrderBook, TradeListener};
pub use config::OrderBookConfig;
pub use error::OrderBookError;
pub use levels::PriceLevels;
pub use order::{Order, OrderId, Side, parse_price};
pub use queue::{BookSide, QueueEntry};
pub use snapshot::{LevelSnapshot, OrderBookSnapshot};
pub use trade::{MatchResult, Trade};
