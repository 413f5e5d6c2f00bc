// demos/src/bin/basic_orderbook.rs

use lob_engine::{MatchResult, Order, OrderBook, OrderBookConfig, OrderId, Side, setup_logger};
use rust_decimal::Decimal;
use tracing::info;

fn main() {
    // Set up logging
    setup_logger();
    info!("Basic OrderBook Example");

    // Create a new order book for a symbol
    let mut book = create_orderbook("BTC/USD");

    // Add resting orders on both sides of the book
    demo_adding_orders(&mut book);

    // Display current book state
    display_orderbook_state(&book);

    // Demonstrate rejected submissions
    demo_rejections(&mut book);

    // Demonstrate limit order matching
    demo_limit_order_matching(&mut book);

    // Demonstrate order cancellation
    demo_cancel_orders(&mut book);

    // Display final book state
    info!("\nFinal OrderBook State:");
    display_orderbook_state(&book);
}

fn create_orderbook(symbol: &str) -> OrderBook {
    info!("Creating OrderBook for symbol: {}", symbol);
    let config = OrderBookConfig::new(symbol).with_auto_compact_threshold(64);

    let mut book = match OrderBook::with_config(config) {
        Ok(book) => book,
        Err(e) => {
            info!("Invalid configuration ({}), falling back to defaults", e);
            OrderBook::new(symbol)
        }
    };

    book.set_trade_listener(|result: &MatchResult| {
        info!(
            "  [listener] {} executed {} across {} trade(s)",
            result.order_id,
            result.executed_quantity(),
            result.trades.len()
        );
    });
    book
}

fn demo_adding_orders(book: &mut OrderBook) {
    info!("\nAdding orders to the OrderBook...");

    // Bids at 9900, 9920, 9940, 9960, 9980
    for i in 0..5 {
        let price = Decimal::from(9900 + i * 20);
        let quantity = 10 + (i as u64 * 5);
        let id = format!("bid-{i}");
        book.add_limit_order(id.as_str(), price, quantity, Side::Buy);
        info!("Added BUY limit order: id={}, price={}, qty={}", id, price, quantity);
    }

    // Asks at 10000, 10020, 10040, 10060, 10080
    for i in 0..5 {
        let price = Decimal::from(10000 + i * 20);
        let quantity = 10 + (i as u64 * 5);
        let id = format!("ask-{i}");
        book.add_limit_order(id.as_str(), price, quantity, Side::Sell);
        info!("Added SELL limit order: id={}, price={}, qty={}", id, price, quantity);
    }
}

fn demo_rejections(book: &mut OrderBook) {
    info!("\nDemonstrating rejected submissions...");

    let duplicate = Order::new("bid-0", Side::Buy, Decimal::from(9900), 5);
    match book.try_submit(duplicate) {
        Ok(_) => info!("Duplicate accepted (unexpected)"),
        Err(e) => info!("Duplicate rejected as expected: {}", e),
    }

    match Order::try_from_f64("nan-price", Side::Sell, f64::NAN, 5) {
        Ok(_) => info!("NaN price accepted (unexpected)"),
        Err(e) => info!("Malformed price rejected as expected: {}", e),
    }

    let empty = Order::new("zero-qty", Side::Sell, Decimal::from(10000), 0);
    let trades = book.submit(empty);
    info!("Zero quantity submit returned {} trades", trades.len());
}

fn demo_limit_order_matching(book: &mut OrderBook) {
    info!("\nDemonstrating limit order matching...");

    // Buy crossing the first two ask levels
    let order = Order::new(OrderId::new_uuid(), Side::Buy, Decimal::from(10020), 20);
    match book.try_submit(order) {
        Ok(result) => {
            info!(
                "Limit BUY result: executed={}, remaining={}, complete={}",
                result.executed_quantity(),
                result.remaining_quantity,
                result.is_complete
            );
            for (i, trade) in result.trades.iter().enumerate() {
                info!(
                    "  Trade {}: price={}, qty={}, taker={}, maker={}",
                    i, trade.price, trade.quantity, trade.taker_order_id, trade.maker_order_id
                );
            }
        }
        Err(e) => info!("Limit BUY failed: {}", e),
    }

    // Sell crossing the best bid and leaving a remainder
    let trades = book.add_limit_order(OrderId::new_uuid(), Decimal::from(9980), 40, Side::Sell);
    info!("Limit SELL produced {} trade(s)", trades.len());
    info!("Last trade price: {:?}", book.last_trade_price());
}

fn demo_cancel_orders(book: &mut OrderBook) {
    info!("\nDemonstrating order cancellation...");

    for id in ["bid-1", "ask-4", "does-not-exist"] {
        match book.try_cancel(&OrderId::from(id)) {
            Ok(order) => info!("Cancelled {} with {} remaining", order.id, order.quantity),
            Err(e) => info!("Cancel of {} ignored: {}", id, e),
        }
    }
    info!("Stale queue entries: {}", book.tombstone_count());
}

fn display_orderbook_state(book: &OrderBook) {
    info!("\nOrderBook State for {}:", book.symbol());
    info!("Best bid: {:?}", book.best_bid());
    info!("Best ask: {:?}", book.best_ask());
    info!("Spread: {:?}", book.spread());
    info!("Mid price: {:?}", book.mid_price());
    info!("Live orders: {}", book.order_count());

    let mut prices = book.price_levels();
    prices.sort();
    for price in prices {
        info!("  {} -> {}", price, book.volume_at(price));
    }

    let snapshot = book.create_snapshot(5);
    match snapshot.to_json() {
        Ok(json) => info!("Snapshot: {}", json),
        Err(e) => info!("Snapshot serialization failed: {}", e),
    }
}
