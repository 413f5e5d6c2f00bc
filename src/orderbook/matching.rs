//! Contains the core matching engine logic for the order book.

use super::book::OrderBook;
use super::order::{Order, Side};
use super::trade::{MatchResult, Trade};
use crate::utils::current_time_millis;
use rust_decimal::Decimal;
use tracing::{debug, trace};

/// Execution price of a fill: the arithmetic mean of the two limit prices.
pub fn execution_price(taker_price: Decimal, maker_price: Decimal) -> Decimal {
    let mean = match taker_price.checked_add(maker_price) {
        Some(sum) => sum / Decimal::TWO,
        // Halving the gap cannot overflow for two positive prices
        None => taker_price + (maker_price - taker_price) / Decimal::TWO,
    };
    mean.normalize()
}

impl OrderBook {
    /// Match `order` against the opposite side of the book.
    ///
    /// Resting orders are consumed best price first, then by arrival. Stale heads
    /// are discarded on the way. Filled makers leave the index and the queue; a
    /// partially filled maker keeps its place at the head. The incoming order is
    /// not rested here and the book's index is not consulted for it.
    pub(super) fn match_order(&mut self, order: &Order) -> MatchResult {
        let mut match_result = MatchResult::new(order.id.clone(), order.quantity);
        let mut remaining_quantity = order.quantity;

        // Choose the appropriate side for matching
        let match_side = match order.side {
            Side::Buy => &mut self.asks,
            Side::Sell => &mut self.bids,
        };

        while remaining_quantity > 0 {
            let Some(head) = match_side.peek() else {
                break;
            };

            let maker = match self.orders.get_mut(&head.order_id) {
                Some(resting) if resting.sequence == head.sequence => resting,
                _ => {
                    trace!(
                        "Order book {}: discarding stale entry for {}",
                        self.symbol, head.order_id
                    );
                    match_side.pop();
                    continue;
                }
            };

            // The queue is price ordered, so nothing further down can match either
            if !order.accepts(maker.order.price) {
                break;
            }

            let fill_quantity = remaining_quantity.min(maker.order.quantity);
            let price = execution_price(order.price, maker.order.price);

            remaining_quantity -= fill_quantity;
            maker.order.quantity -= fill_quantity;

            let maker_id = maker.order.id.clone();
            let maker_price = maker.order.price;
            let maker_filled = maker.order.quantity == 0;

            self.price_levels.remove(maker_price, fill_quantity);
            self.last_trade_price = Some(price);

            debug!(
                "Order book {}: {} {} x {} against {} at {}",
                self.symbol, order.side, order.id, fill_quantity, maker_id, price
            );

            if maker_filled {
                self.orders.remove(&maker_id);
                match_side.pop();
            }

            match_result.add_trade(Trade {
                trade_id: self.trade_id_generator.next_id(),
                price,
                quantity: fill_quantity,
                taker_order_id: order.id.clone(),
                maker_order_id: maker_id,
                taker_side: order.side,
                timestamp: current_time_millis(),
            });
        }

        match_result.remaining_quantity = remaining_quantity;
        match_result.is_complete = remaining_quantity == 0;
        match_result
    }

    /// Quantity an order could execute right now, without touching the book
    pub fn peek_match(&self, side: Side, price: Decimal, quantity: u64) -> u64 {
        let probe = Order {
            id: "peek".into(),
            side,
            price,
            quantity,
            timestamp: 0,
        };

        let mut matched_quantity = 0u64;
        for resting in self
            .get_orders(side.opposite())
            .into_iter()
            .take_while(|resting| probe.accepts(resting.price))
        {
            if matched_quantity >= quantity {
                break;
            }
            let needed_quantity = quantity - matched_quantity;
            matched_quantity += needed_quantity.min(resting.quantity);
        }
        matched_quantity
    }
}
