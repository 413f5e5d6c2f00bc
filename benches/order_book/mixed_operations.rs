use criterion::Criterion;
use lob_engine::{OrderBook, OrderId, Side};
use rust_decimal::Decimal;
use std::hint::black_box;

/// Register benchmarks for mixed/realistic order book operations
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Mixed Operations");

    // Benchmark a realistic trading scenario with mixed operations
    group.bench_function("realistic_trading_scenario", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            let mut resting_ids = Vec::with_capacity(100);

            // Phase 1: Add initial orders on both sides of the book
            for i in 0..50 {
                let bid_id = OrderId::new_uuid();
                let ask_id = OrderId::new_uuid();
                let _ = black_box(order_book.add_limit_order(
                    bid_id.clone(),
                    Decimal::from(990 + i % 10),
                    10,
                    Side::Buy,
                ));
                let _ = black_box(order_book.add_limit_order(
                    ask_id.clone(),
                    Decimal::from(1010 + i % 10),
                    10,
                    Side::Sell,
                ));
                resting_ids.push(bid_id);
                resting_ids.push(ask_id);
            }

            // Phase 2: Cross the spread in both directions
            for i in 0..5 {
                let (side, price) = if i % 2 == 0 {
                    (Side::Buy, 1015)
                } else {
                    (Side::Sell, 995)
                };
                let _ = black_box(order_book.add_limit_order(
                    OrderId::new_uuid(),
                    Decimal::from(price),
                    50,
                    side,
                ));
            }

            // Phase 3: Cancel every third original order
            for id in resting_ids.iter().step_by(3) {
                order_book.cancel(id);
            }

            // Phase 4: Read the aggregated book
            black_box(order_book.price_levels());
            black_box(order_book.create_snapshot(10));
        })
    });

    group.finish();
}
