use criterion::{BenchmarkId, Criterion};
use lob_engine::{OrderBook, OrderId, Side};
use rust_decimal::Decimal;
use std::hint::black_box;

/// Register all benchmarks for adding resting orders to an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // Non-crossing bids spread over 100 price levels
    group.bench_function("add_limit_orders", |b| {
        b.iter(|| {
            let mut order_book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100 {
                let _ = black_box(order_book.add_limit_order(
                    OrderId::new_uuid(),
                    Decimal::from(1000 + i),
                    10,
                    Side::Buy,
                ));
            }
        })
    });

    // Parametrized benchmark with different order counts at a single price
    for order_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut order_book = OrderBook::new("TEST-SYMBOL");
                    for _i in 0..order_count {
                        let _ = black_box(order_book.add_limit_order(
                            OrderId::new_uuid(),
                            Decimal::from(1000),
                            10,
                            Side::Sell,
                        ));
                    }
                })
            },
        );
    }

    group.finish();
}
