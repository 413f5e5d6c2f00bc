//! Order book operations: submitting and cancelling orders

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Order, OrderId, Side};
use super::trade::{MatchResult, Trade};
use rust_decimal::Decimal;
use tracing::{debug, trace};

impl OrderBook {
    /// Submit a limit order and return the trades it produced.
    ///
    /// Invalid input (a duplicate live id, zero quantity, non-positive price) is
    /// silently rejected: nothing in the book changes and the result is empty.
    /// An empty result is also what a valid order that rests without matching
    /// produces, so the two cases cannot be told apart here. Use
    /// [`OrderBook::try_submit`] when the difference matters.
    pub fn submit(&mut self, order: Order) -> Vec<Trade> {
        match self.try_submit(order) {
            Ok(match_result) => match_result.trades,
            Err(err) => {
                debug!("Order book {}: rejected order: {}", self.symbol, err);
                Vec::new()
            }
        }
    }

    /// Submit a limit order, reporting rejections as errors.
    ///
    /// On success the result carries the trades and the quantity left resting.
    /// On error the book is exactly as it was before the call.
    pub fn try_submit(&mut self, mut order: Order) -> Result<MatchResult, OrderBookError> {
        trace!("Order book {}: submitting order {}", self.symbol, order);

        if self.orders.contains_key(&order.id) {
            return Err(OrderBookError::DuplicateOrderId(order.id.to_string()));
        }
        order.validate()?;
        order.price = order.price.normalize();

        let match_result = self.match_order(&order);

        if match_result.remaining_quantity > 0 {
            order.quantity = match_result.remaining_quantity;
            self.rest_order(order);
        }

        if !match_result.trades.is_empty() {
            if let Some(listener) = &self.trade_listener {
                listener(&match_result);
            }
        }

        Ok(match_result)
    }

    /// Build a limit order and submit it
    pub fn add_limit_order(
        &mut self,
        id: impl Into<OrderId>,
        price: Decimal,
        quantity: u64,
        side: Side,
    ) -> Vec<Trade> {
        let order = Order::new(id, side, price, quantity);
        trace!(
            "Adding limit order {} {} {} {}",
            order.id, price, quantity, side
        );
        self.submit(order)
    }

    /// Cancel a live order. Unknown or already finished ids are ignored.
    pub fn cancel(&mut self, order_id: &OrderId) {
        if let Err(err) = self.try_cancel(order_id) {
            trace!("Order book {}: cancel ignored: {}", self.symbol, err);
        }
    }

    /// Cancel a live order and return it with its remaining quantity.
    ///
    /// The order leaves the index and the price-level ledger immediately. Its
    /// queue entry stays behind as a tombstone until it reaches the head of the
    /// queue or the book is compacted.
    pub fn try_cancel(&mut self, order_id: &OrderId) -> Result<Order, OrderBookError> {
        trace!("Order book {}: cancelling order {}", self.symbol, order_id);

        let resting = self
            .orders
            .remove(order_id)
            .ok_or_else(|| OrderBookError::OrderNotFound(order_id.to_string()))?;

        self.price_levels
            .remove(resting.order.price, resting.order.quantity);
        debug!(
            "Order book {}: cancelled {} with {} remaining",
            self.symbol, order_id, resting.order.quantity
        );

        self.maybe_compact();
        Ok(resting.order)
    }
}
