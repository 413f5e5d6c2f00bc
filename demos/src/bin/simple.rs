use lob_engine::{Order, OrderBook, OrderId, Side};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut book = OrderBook::new("BTC-USDT");

    book.submit(Order::new("s1", Side::Sell, Decimal::from(10), 5));
    println!("Levels after resting sell: {:?}", book.price_levels());
    println!("Volume at 10: {}", book.volume_at(Decimal::from(10)));

    // Crosses the resting sell; both orders are fully filled
    let trades = book.submit(Order::new("b1", Side::Buy, Decimal::from(10), 5));
    for trade in &trades {
        println!("{}", serde_json::to_string(trade)?);
    }

    // Nothing rests, and both ids are free to reuse
    println!("Levels after cross: {:?}", book.price_levels());
    println!("s1 live: {}", book.contains_order(&OrderId::from("s1")));
    println!("Snapshot: {:?}", book.create_snapshot(10));
    Ok(())
}
