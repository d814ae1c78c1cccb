// demos/src/bin/basic_matching.rs

use matchengine_demos::setup_logger;
use matchengine_rs::{MatchEngine, Order, Side};
use tracing::info;

fn main() {
    setup_logger();
    info!("Basic MatchEngine Example");

    // One instrument, batch execution delivery
    let mut engine = MatchEngine::new(1024, 8192);

    // Build a two-sided book
    demo_resting_orders(&mut engine);
    display_book_state(&engine);

    // Cross the spread and inspect the fills
    demo_crossing_orders(&mut engine);

    // Cancel a resting order and watch it evaporate lazily
    demo_cancellation(&mut engine);

    info!("Final book state:");
    display_book_state(&engine);
}

fn demo_resting_orders(engine: &mut MatchEngine) {
    info!("Adding resting orders...");

    // Bids at 9900..9980
    for i in 0..5 {
        let price = 9_900 + i * 20;
        let quantity = 10 + i * 5;
        let order = Order::new(format!("bid-{}", i), Side::Buy, price, quantity);

        match engine.process_order(order) {
            Ok(executions) => info!(
                "BUY {} @ {} rested ({} executions)",
                quantity,
                price,
                executions.len()
            ),
            Err(e) => info!("BUY rejected: {}", e),
        }
    }

    // Asks at 10000..10080
    for i in 0..5 {
        let price = 10_000 + i * 20;
        let quantity = 10 + i * 5;
        let order = Order::new(format!("ask-{}", i), Side::Sell, price, quantity);

        match engine.process_order(order) {
            Ok(executions) => info!(
                "SELL {} @ {} rested ({} executions)",
                quantity,
                price,
                executions.len()
            ),
            Err(e) => info!("SELL rejected: {}", e),
        }
    }
}

fn demo_crossing_orders(engine: &mut MatchEngine) {
    info!("Crossing the spread...");

    // Lifts the 10000 and 10020 asks, rests the remainder at 10020
    let order = Order::new("taker-1", Side::Buy, 10_020, 30);
    match engine.process_order(order) {
        Ok(executions) => {
            info!("BUY 30 @ 10020 produced {} executions:", executions.len());
            for execution in &executions {
                info!("  {}", execution);
            }
        }
        Err(e) => info!("BUY failed: {}", e),
    }

    if let Some(price) = engine.last_trade_price() {
        info!("Last trade price: {}", price);
    }
}

fn demo_cancellation(engine: &mut MatchEngine) {
    info!("Cancelling a resting bid...");

    engine.cancel_order("bid-0").unwrap();
    info!("bid-0 marked; it stays on the book until matching reaches it");

    // A sell deep enough to walk the bid ladder sweeps the marker away
    let order = Order::new("taker-2", Side::Sell, 9_900, 100);
    match engine.process_order(order) {
        Ok(executions) => {
            info!("SELL 100 @ 9900 produced {} executions:", executions.len());
            for execution in &executions {
                info!("  {}", execution);
            }
        }
        Err(e) => info!("SELL failed: {}", e),
    }
}

fn display_book_state(engine: &MatchEngine) {
    match (engine.best_bid(), engine.best_ask()) {
        (Some(bid), Some(ask)) => {
            info!("Best bid: {}", bid);
            info!("Best ask: {}", ask);
            info!("Spread: {:?}", engine.spread());
            info!("Mid price: {:?}", engine.mid_price());
        }
        (Some(bid), None) => info!("Best bid: {} (no asks)", bid),
        (None, Some(ask)) => info!("Best ask: {} (no bids)", ask),
        (None, None) => info!("Book is empty"),
    }

    let snapshot = engine.snapshot(3);
    info!("Bids:");
    for level in &snapshot.bids {
        info!(
            "  price={} orders={} quantity={}",
            level.price, level.order_count, level.total_quantity
        );
    }
    info!("Asks:");
    for level in &snapshot.asks {
        info!(
            "  price={} orders={} quantity={}",
            level.price, level.order_count, level.total_quantity
        );
    }
}
