//! Price-time priority queue for one side of the book

use crate::orderbook::order::{OrderId, Side};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A handle to a resting order inside a side's heap.
///
/// The entry never owns the order: the book's index does. An entry whose
/// `(order_id, sequence)` pair no longer resolves to a live order is a tombstone.
#[derive(Debug, Clone)]
pub struct QueueEntry {
    /// Signed price used for heap ordering: the price for bids, its negation for asks
    priority: Decimal,
    /// Limit price of the referenced order
    pub price: Decimal,
    /// Arrival sequence assigned by the book
    pub sequence: u64,
    /// Id of the referenced order
    pub order_id: OrderId,
}

impl QueueEntry {
    fn new(side: Side, order_id: OrderId, price: Decimal, sequence: u64) -> Self {
        let priority = match side {
            Side::Buy => price,
            Side::Sell => -price,
        };
        Self {
            priority,
            price,
            sequence,
            order_id,
        }
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    // Better price first, then earlier arrival.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One side of the book: a max-heap whose head is the best-priced, earliest order.
///
/// The heap may contain tombstones. Callers decide liveness against the order
/// index and pop stale heads as they meet them.
#[derive(Debug, Clone)]
pub struct BookSide {
    side: Side,
    heap: BinaryHeap<QueueEntry>,
}

impl BookSide {
    /// Create an empty side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            heap: BinaryHeap::new(),
        }
    }

    /// Which side of the book this is
    pub fn side(&self) -> Side {
        self.side
    }

    /// Push a handle for a resting order
    pub fn push(&mut self, order_id: OrderId, price: Decimal, sequence: u64) {
        self.heap
            .push(QueueEntry::new(self.side, order_id, price, sequence));
    }

    /// The head of the heap, which may be a tombstone
    pub fn peek(&self) -> Option<&QueueEntry> {
        self.heap.peek()
    }

    /// Remove and return the head of the heap
    pub fn pop(&mut self) -> Option<QueueEntry> {
        self.heap.pop()
    }

    /// Keep only the entries for which `keep` returns true; returns how many were dropped
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&QueueEntry) -> bool,
    {
        let before = self.heap.len();
        self.heap.retain(keep);
        before - self.heap.len()
    }

    /// Iterate over every entry in arbitrary order, tombstones included
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry> {
        self.heap.iter()
    }

    /// Number of physical entries, tombstones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when the heap holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
