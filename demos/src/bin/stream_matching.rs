// demos/src/bin/stream_matching.rs

use matchengine_demos::setup_logger;
use matchengine_rs::{MatchEngine, Order, Side};
use std::thread;
use tracing::info;

fn main() {
    setup_logger();
    info!("Streaming MatchEngine Example");

    let (mut engine, stream) = MatchEngine::with_execution_stream(1024, 8192, 100_000);

    // Consumer drains the bounded channel on its own thread
    let consumer = thread::spawn(move || {
        let mut count = 0u64;
        let mut volume = 0i64;
        for execution in stream.iter() {
            count += 1;
            volume += execution.quantity;
            info!("execution #{}: {}", count, execution);
        }
        (count, volume)
    });

    // Build a small ask ladder
    for i in 0..10 {
        let order = Order::new(format!("maker-{}", i), Side::Sell, 10_000 + i * 10, 20);
        engine.process_order(order).unwrap();
    }

    // Sweep most of it
    let taker = Order::new("sweeper", Side::Buy, 10_060, 130);
    engine.process_order(taker).unwrap();

    info!(
        "book after the sweep: best ask {:?}, {} ask levels",
        engine.best_ask(),
        engine.level_count(Side::Sell)
    );

    // Dropping the engine closes the channel and ends the consumer
    drop(engine);
    let (count, volume) = consumer.join().unwrap();
    info!("consumer saw {} executions for {} total quantity", count, volume);
}
