//! Core OrderBook implementation: queues, order index and price-level ledger

use super::config::OrderBookConfig;
use super::error::OrderBookError;
use super::levels::PriceLevels;
use super::matching::execution_price;
use super::order::{Order, OrderId, Side};
use super::queue::{BookSide, QueueEntry};
use super::snapshot::{LevelSnapshot, OrderBookSnapshot};
use super::trade::MatchResult;
use crate::utils::{TradeIdGenerator, current_time_millis};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use tracing::{debug, trace};
use uuid::Uuid;

/// Callback invoked with every match result that produced at least one trade
pub type TradeListener = Box<dyn Fn(&MatchResult)>;

/// A live order together with the arrival sequence its queue handle carries
#[derive(Debug, Clone)]
pub(crate) struct RestingOrder {
    pub(crate) order: Order,
    pub(crate) sequence: u64,
}

/// Whether a queue handle still refers to a live order.
///
/// Comparing the sequence as well as the id keeps an old tombstone from being
/// revived when a caller reuses the identifier of a filled or cancelled order.
pub(crate) fn is_live(orders: &HashMap<OrderId, RestingOrder>, entry: &QueueEntry) -> bool {
    orders
        .get(&entry.order_id)
        .is_some_and(|resting| resting.sequence == entry.sequence)
}

/// The OrderBook holds the bid and ask queues for one instrument, the index of
/// live orders and the aggregated resting quantity by price.
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Bid side, best (highest) price first
    pub(super) bids: BookSide,

    /// Ask side, best (lowest) price first
    pub(super) asks: BookSide,

    /// Live orders by id; the only authority on whether an order is live
    pub(super) orders: HashMap<OrderId, RestingOrder>,

    /// Resting quantity by price, both sides pooled
    pub(super) price_levels: PriceLevels,

    /// Next arrival sequence to hand out
    pub(super) next_sequence: u64,

    /// Generator for unique trade IDs
    pub(super) trade_id_generator: TradeIdGenerator,

    /// The last price at which a trade occurred
    pub(super) last_trade_price: Option<Decimal>,

    /// Tombstone count that triggers compaction, if any
    pub(super) auto_compact_threshold: Option<usize>,

    /// Optional observer of executions
    pub(super) trade_listener: Option<TradeListener>,
}

impl OrderBook {
    /// Create a new order book for the given symbol
    pub fn new(symbol: &str) -> Self {
        Self::from_config(OrderBookConfig::new(symbol))
    }

    /// Create an order book from a validated configuration
    pub fn with_config(config: OrderBookConfig) -> Result<Self, OrderBookError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Create a new order book that reports executions to `listener`
    pub fn with_trade_listener<F>(symbol: &str, listener: F) -> Self
    where
        F: Fn(&MatchResult) + 'static,
    {
        let mut book = Self::new(symbol);
        book.set_trade_listener(listener);
        book
    }

    /// Install or replace the trade listener
    pub fn set_trade_listener<F>(&mut self, listener: F)
    where
        F: Fn(&MatchResult) + 'static,
    {
        self.trade_listener = Some(Box::new(listener));
    }

    fn from_config(config: OrderBookConfig) -> Self {
        // Create a unique namespace for this order book's trade IDs
        let namespace = Uuid::new_v4();
        trace!(
            "Creating order book {} (auto compaction: {:?})",
            config.symbol, config.auto_compact_threshold
        );

        Self {
            symbol: config.symbol,
            bids: BookSide::new(Side::Buy),
            asks: BookSide::new(Side::Sell),
            orders: HashMap::new(),
            price_levels: PriceLevels::new(),
            next_sequence: 0,
            trade_id_generator: TradeIdGenerator::new(namespace),
            last_trade_price: None,
            auto_compact_threshold: config.auto_compact_threshold,
            trade_listener: None,
        }
    }

    /// Get the symbol of this order book
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Whether a trade listener is installed
    pub fn has_trade_listener(&self) -> bool {
        self.trade_listener.is_some()
    }

    /// Every price carrying resting quantity. No ordering is guaranteed.
    pub fn price_levels(&self) -> Vec<Decimal> {
        self.price_levels.prices()
    }

    /// Aggregate resting quantity at `price`, or zero.
    ///
    /// Wider than an order quantity so that many large orders at one price sum
    /// exactly.
    pub fn volume_at(&self, price: Decimal) -> u128 {
        self.price_levels.volume_at(price)
    }

    /// Look up a live order
    pub fn get_order(&self, order_id: &OrderId) -> Option<&Order> {
        self.orders.get(order_id).map(|resting| &resting.order)
    }

    /// Whether `order_id` is live in the book
    pub fn contains_order(&self, order_id: &OrderId) -> bool {
        self.orders.contains_key(order_id)
    }

    /// Number of live orders
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// All live orders on one side, best priority first
    pub fn get_orders(&self, side: Side) -> Vec<&Order> {
        let mut entries: Vec<&QueueEntry> = self
            .book_side(side)
            .iter()
            .filter(|entry| is_live(&self.orders, entry))
            .collect();
        entries.sort_by(|a, b| b.cmp(a));
        entries
            .into_iter()
            .filter_map(|entry| self.get_order(&entry.order_id))
            .collect()
    }

    /// Get the best bid price, if any.
    ///
    /// Constant time while the head of the queue is live. When the head is a
    /// cancelled order this scans the whole side, so a book that accumulates many
    /// cancellations should call [`OrderBook::compact`] or configure automatic
    /// compaction. The same applies to [`OrderBook::best_ask`],
    /// [`OrderBook::mid_price`] and [`OrderBook::spread`].
    pub fn best_bid(&self) -> Option<Decimal> {
        self.best_price(Side::Buy)
    }

    /// Get the best ask price, if any
    pub fn best_ask(&self) -> Option<Decimal> {
        self.best_price(Side::Sell)
    }

    /// Get the mid price (average of best bid and best ask)
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(execution_price(bid, ask)),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid)
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Get the last trade price, if any
    pub fn last_trade_price(&self) -> Option<Decimal> {
        self.last_trade_price
    }

    /// Number of stale queue entries still waiting to be discarded
    pub fn tombstone_count(&self) -> usize {
        (self.bids.len() + self.asks.len()).saturating_sub(self.orders.len())
    }

    /// Drop every tombstone from both queues; returns how many were removed
    pub fn compact(&mut self) -> usize {
        let orders = &self.orders;
        let removed = self.bids.retain(|entry| is_live(orders, entry))
            + self.asks.retain(|entry| is_live(orders, entry));
        debug!(
            "Order book {}: compacted {} stale queue entries",
            self.symbol, removed
        );
        removed
    }

    /// Create a snapshot of the live book, at most `depth` levels per side
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let mut bids = self.side_levels(Side::Buy);
        bids.reverse(); // Descending order
        bids.truncate(depth);

        let mut asks = self.side_levels(Side::Sell);
        asks.truncate(depth);

        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids,
            asks,
        }
    }

    /// Per-side levels built from live orders, ascending by price
    fn side_levels(&self, side: Side) -> Vec<LevelSnapshot> {
        let mut levels: BTreeMap<Decimal, (u128, usize)> = BTreeMap::new();
        for resting in self.orders.values().filter(|r| r.order.side == side) {
            let level = levels.entry(resting.order.price).or_insert((0, 0));
            level.0 = level.0.saturating_add(u128::from(resting.order.quantity));
            level.1 += 1;
        }

        levels
            .into_iter()
            .map(|(price, (quantity, order_count))| LevelSnapshot {
                price,
                quantity,
                order_count,
            })
            .collect()
    }

    fn best_price(&self, side: Side) -> Option<Decimal> {
        let book_side = self.book_side(side);
        match book_side.peek() {
            Some(head) if is_live(&self.orders, head) => Some(head.price),
            // Stale head: O(n) scan of the live entries until the next pop or compaction
            Some(_) => book_side
                .iter()
                .filter(|entry| is_live(&self.orders, entry))
                .max()
                .map(|entry| entry.price),
            None => None,
        }
    }

    pub(super) fn book_side(&self, side: Side) -> &BookSide {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::from_config(OrderBookConfig::default())
    }
}

impl fmt::Debug for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBook")
            .field("symbol", &self.symbol)
            .field("orders", &self.orders.len())
            .field("bids", &self.bids.len())
            .field("asks", &self.asks.len())
            .field("price_levels", &self.price_levels)
            .field("last_trade_price", &self.last_trade_price)
            .field("has_trade_listener", &self.trade_listener.is_some())
            .finish()
    }
}
