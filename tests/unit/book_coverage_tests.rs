//! Public API tests for book construction, queries and snapshots

#[cfg(test)]
mod book_coverage_tests {
    use lob_engine::{Order, OrderBook, OrderBookConfig, OrderId, Side, setup_logger};
    use rust_decimal::Decimal;

    #[test]
    fn test_with_trade_listener_constructor() {
        fn dummy_listener(_match_result: &lob_engine::MatchResult) {}
        let book = OrderBook::with_trade_listener("TEST", dummy_listener);

        assert_eq!(book.symbol(), "TEST");
        assert!(book.has_trade_listener());
        assert_eq!(book.best_bid(), None);
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn test_with_config_from_json() {
        let config =
            OrderBookConfig::from_json(r#"{"symbol":"XAU/USD","auto_compact_threshold":4}"#)
                .unwrap();
        let book = OrderBook::with_config(config).unwrap();

        assert_eq!(book.symbol(), "XAU/USD");
    }

    #[test]
    fn test_logging_does_not_change_behaviour() {
        setup_logger();
        let mut book = OrderBook::new("LOGGED");
        book.submit(Order::new("s1", Side::Sell, Decimal::from(10), 5));
        let trades = book.submit(Order::new("b1", Side::Buy, Decimal::from(10), 5));

        assert_eq!(trades.len(), 1);
    }

    #[test]
    fn test_float_prices_through_try_from_f64() {
        let mut book = OrderBook::new("FLOAT");
        let sell = Order::try_from_f64("s1", Side::Sell, 99.5, 4).unwrap();
        let buy = Order::try_from_f64("b1", Side::Buy, 100.25, 4).unwrap();

        book.submit(sell);
        let trades = book.submit(buy);

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, Decimal::new(99875, 3));
    }

    #[test]
    fn test_snapshot_after_activity() {
        let mut book = OrderBook::new("SNAP");
        for (i, price) in [100, 101, 102].iter().enumerate() {
            book.submit(Order::new(
                format!("s{i}").as_str(),
                Side::Sell,
                Decimal::from(*price),
                10,
            ));
        }
        book.submit(Order::new("b1", Side::Buy, Decimal::from(101), 15));
        book.submit(Order::new("b2", Side::Buy, Decimal::from(95), 7));
        book.cancel(&OrderId::from("s2"));

        let snapshot = book.create_snapshot(5);

        assert_eq!(snapshot.best_bid(), Some((Decimal::from(95), 7)));
        assert_eq!(snapshot.best_ask(), Some((Decimal::from(101), 5)));
        assert_eq!(snapshot.total_ask_volume(), 5);
        assert_eq!(snapshot.total_bid_volume(), 7);

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"symbol\":\"SNAP\""));
    }
}
