use super::book::{OrderBook, RestingOrder};
use super::order::{Order, Side};
use tracing::trace;

impl OrderBook {
    /// Places the unfilled remainder of an order in the book: queue handle,
    /// index entry and price-level quantity.
    pub(super) fn rest_order(&mut self, order: Order) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let book_side = match order.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        book_side.push(order.id.clone(), order.price, sequence);

        self.price_levels.add(order.price, order.quantity);
        trace!(
            "Order book {}: resting {} (sequence {})",
            self.symbol, order, sequence
        );
        self.orders
            .insert(order.id.clone(), RestingOrder { order, sequence });
    }

    /// Compacts the queues once enough tombstones have built up
    pub(super) fn maybe_compact(&mut self) {
        if let Some(threshold) = self.auto_compact_threshold {
            if self.tombstone_count() >= threshold {
                self.compact();
            }
        }
    }
}
