//! Invariant checks over scripted order flows.

use matchengine_rs::{Execution, MatchEngine, Order, Side};
use std::collections::HashMap;

fn order(id: &str, side: Side, price: i64, quantity: i64) -> Order {
    Order::new(id, side, price, quantity)
}

/// Applies a scripted flow, checking the structural invariants after every
/// call, and returns everything that executed.
fn run_script(engine: &mut MatchEngine, script: &[(&str, Side, i64, i64)]) -> Vec<Execution> {
    let mut all = Vec::new();
    for &(id, side, price, quantity) in script {
        let executions = engine.process_order(order(id, side, price, quantity)).unwrap();
        all.extend(executions);
        assert_no_empty_levels(engine);
        assert_pool_conservation(engine);
    }
    all
}

/// No level is ever empty-and-present (IV5).
fn assert_no_empty_levels(engine: &MatchEngine) {
    let snapshot = engine.snapshot(usize::MAX);
    for level in snapshot.bids.iter().chain(snapshot.asks.iter()) {
        assert!(
            level.order_count > 0,
            "empty level left at price {}",
            level.price
        );
    }
}

/// Idle queues plus populated levels always equal the pool size (IV7).
fn assert_pool_conservation(engine: &MatchEngine) {
    let populated = engine.level_count(Side::Buy) + engine.level_count(Side::Sell);
    assert_eq!(engine.available_queues() + populated, 16);
}

const SCRIPT: &[(&str, Side, i64, i64)] = &[
    ("b1", Side::Buy, 100, 50),
    ("b2", Side::Buy, 99, 30),
    ("b3", Side::Buy, 100, 20),
    ("s1", Side::Sell, 105, 40),
    ("s2", Side::Sell, 101, 25),
    // Sweeps the whole 100 level, then part of b2 at 99.
    ("s3", Side::Sell, 98, 80),
    // Crosses s2 at 101 and part of s1 at 105.
    ("b4", Side::Buy, 105, 45),
    ("s4", Side::Sell, 97, 10),
    ("b5", Side::Buy, 97, 5),
];

#[test]
fn quantity_is_conserved_for_every_order() {
    let mut engine = MatchEngine::new(16, 64);
    let executions = run_script(&mut engine, SCRIPT);

    // Executed quantity per order ID, regardless of side.
    let mut executed: HashMap<String, i64> = HashMap::new();
    for execution in &executions {
        *executed.entry(execution.buy_order_id.to_string()).or_default() += execution.quantity;
        *executed.entry(execution.sell_order_id.to_string()).or_default() += execution.quantity;
    }

    // Resting quantity per order ID from the final book.
    let mut resting: HashMap<i64, i64> = HashMap::new();
    let snapshot = engine.snapshot(usize::MAX);
    for level in snapshot.bids.iter().chain(snapshot.asks.iter()) {
        resting.insert(level.price, level.total_quantity);
    }

    for &(id, _, _, submitted) in SCRIPT {
        let filled = executed.get(id).copied().unwrap_or(0);
        assert!(
            filled <= submitted,
            "order {} filled {} of {}",
            id,
            filled,
            submitted
        );
    }

    // Whole-book conservation: everything submitted either executed (once
    // on each side per fill) or still rests.
    let submitted_total: i64 = SCRIPT.iter().map(|&(_, _, _, quantity)| quantity).sum();
    let executed_total: i64 = executions.iter().map(|e| e.quantity).sum();
    let resting_total: i64 = resting.values().sum();
    assert_eq!(submitted_total, 2 * executed_total + resting_total);
}

#[test]
fn execution_prices_respect_both_limits() {
    let mut engine = MatchEngine::new(16, 64);
    let executions = run_script(&mut engine, SCRIPT);
    assert!(!executions.is_empty());

    let limits: HashMap<&str, (Side, i64)> = SCRIPT
        .iter()
        .map(|&(id, side, price, _)| (id, (side, price)))
        .collect();

    for execution in &executions {
        let (_, buy_limit) = limits[execution.buy_order_id.as_str()];
        let (_, sell_limit) = limits[execution.sell_order_id.as_str()];
        assert!(
            execution.price <= buy_limit,
            "buyer {} paid {} over its limit {}",
            execution.buy_order_id,
            execution.price,
            buy_limit
        );
        assert!(
            execution.price >= sell_limit,
            "seller {} received {} under its limit {}",
            execution.sell_order_id,
            execution.price,
            sell_limit
        );
    }
}

#[test]
fn earlier_order_at_a_price_fills_first() {
    let mut engine = MatchEngine::new(16, 64);

    engine.process_order(order("early", Side::Sell, 10, 8)).unwrap();
    engine.process_order(order("late", Side::Sell, 10, 8)).unwrap();

    // Two takers, each smaller than "early": "late" must stay untouched
    // until "early" is exhausted.
    let first = engine.process_order(order("t1", Side::Buy, 10, 5)).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].sell_order_id.as_str(), "early");

    let second = engine.process_order(order("t2", Side::Buy, 10, 5)).unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].sell_order_id.as_str(), "early");
    assert_eq!(second[0].quantity, 3);
    assert_eq!(second[1].sell_order_id.as_str(), "late");
    assert_eq!(second[1].quantity, 2);
}

#[test]
fn taker_prices_worsen_monotonically() {
    let mut engine = MatchEngine::new(16, 64);
    for (id, price) in [("s1", 103), ("s2", 101), ("s3", 102), ("s4", 101)] {
        engine.process_order(order(id, Side::Sell, price, 10)).unwrap();
    }

    let buys = engine.process_order(order("b", Side::Buy, 103, 35)).unwrap();
    let buy_prices: Vec<i64> = buys.iter().map(|e| e.price).collect();
    assert!(
        buy_prices.windows(2).all(|pair| pair[0] <= pair[1]),
        "buy fills got cheaper later: {:?}",
        buy_prices
    );

    for (id, price) in [("x1", 97), ("x2", 99), ("x3", 98)] {
        engine.process_order(order(id, Side::Buy, price, 10)).unwrap();
    }

    let sells = engine.process_order(order("s", Side::Sell, 97, 25)).unwrap();
    let sell_prices: Vec<i64> = sells.iter().map(|e| e.price).collect();
    assert!(
        sell_prices.windows(2).all(|pair| pair[0] >= pair[1]),
        "sell fills got richer later: {:?}",
        sell_prices
    );
}

#[test]
fn cancelled_id_never_appears_in_an_execution() {
    let mut engine = MatchEngine::new(16, 64);

    engine.process_order(order("keep", Side::Sell, 10, 5)).unwrap();
    engine.process_order(order("gone", Side::Sell, 10, 5)).unwrap();
    engine.process_order(order("also-keep", Side::Sell, 10, 5)).unwrap();
    engine.cancel_order("gone").unwrap();

    let executions = engine.process_order(order("t", Side::Buy, 10, 15)).unwrap();

    assert!(executions
        .iter()
        .all(|e| e.sell_order_id.as_str() != "gone" && e.buy_order_id.as_str() != "gone"));
    let filled: i64 = executions.iter().map(|e| e.quantity).sum();
    assert_eq!(filled, 10);
}

#[test]
fn cancellation_flow_preserves_pool_accounting() {
    let mut engine = MatchEngine::new(16, 64);

    engine.process_order(order("a", Side::Buy, 100, 10)).unwrap();
    engine.process_order(order("b", Side::Buy, 101, 10)).unwrap();
    engine.cancel_order("a").unwrap();
    engine.cancel_order("b").unwrap();
    assert_pool_conservation(&engine);

    // Sweeping both cancelled levels retires them and frees both queues;
    // the taker then rests on its own side.
    engine.process_order(order("s", Side::Sell, 95, 30)).unwrap();
    assert_pool_conservation(&engine);
    assert_eq!(engine.level_count(Side::Buy), 0);
    assert_eq!(engine.level_count(Side::Sell), 1);
}
