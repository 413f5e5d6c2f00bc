//! Integration tests for price-time priority and the execution price rule

#[cfg(test)]
mod tests {
    use lob_engine::{Order, OrderBook, OrderId, Side};
    use rust_decimal::Decimal;

    fn d(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_price_priority() {
        let mut book = OrderBook::new("TEST");
        book.submit(Order::new("s100", Side::Sell, d(100), 1));
        book.submit(Order::new("s99", Side::Sell, d(99), 1));

        let trades = book.submit(Order::new("b", Side::Buy, d(100), 1));

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].maker_order_id, OrderId::from("s99"));
    }

    #[test]
    fn test_time_priority() {
        let mut book = OrderBook::new("TEST");
        book.submit(Order::new("A", Side::Sell, d(100), 1));
        book.submit(Order::new("B", Side::Sell, d(100), 1));

        let trades = book.submit(Order::new("b", Side::Buy, d(100), 1));

        assert_eq!(trades[0].maker_order_id, OrderId::from("A"));
        assert!(book.contains_order(&OrderId::from("B")));
    }

    #[test]
    fn test_mean_execution_price() {
        let mut book = OrderBook::new("TEST");
        book.submit(Order::new("s", Side::Sell, d(100), 3));

        let trades = book.submit(Order::new("b", Side::Buy, d(102), 3));

        assert_eq!(trades[0].price, d(101));
    }

    #[test]
    fn test_sell_taker_sweeps_bids_high_to_low() {
        let mut book = OrderBook::new("TEST");
        book.submit(Order::new("b1", Side::Buy, d(10), 1));
        book.submit(Order::new("b3", Side::Buy, d(12), 1));
        book.submit(Order::new("b2", Side::Buy, d(11), 1));

        let trades = book.submit(Order::new("s", Side::Sell, d(10), 5));

        let makers: Vec<_> = trades.iter().map(|t| t.maker_order_id.to_string()).collect();
        assert_eq!(makers, vec!["b3", "b2", "b1"]);
        assert_eq!(book.volume_at(d(10)), 2);
        assert_eq!(book.best_ask(), Some(d(10)));
        assert_eq!(book.best_bid(), None);
    }

    #[test]
    fn test_many_tombstones_ahead_of_live_order() {
        let mut book = OrderBook::new("TEST");
        for i in 0..50 {
            book.submit(Order::new(format!("c{i}").as_str(), Side::Sell, d(90 + i), 1));
        }
        book.submit(Order::new("live", Side::Sell, d(200), 1));
        for i in 0..50 {
            book.cancel(&OrderId::new(format!("c{i}")));
        }
        assert_eq!(book.tombstone_count(), 50);

        let trades = book.submit(Order::new("b", Side::Buy, d(200), 1));

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].maker_order_id, OrderId::from("live"));
        assert_eq!(book.tombstone_count(), 0);
        assert_eq!(book.order_count(), 0);
    }
}
