//! # Limit-Order Matching Engine
//!
//! A price-time priority matching engine for a single instrument. Incoming limit orders are matched against the opposite side of the book from the best price outward; whatever does not fill rests in a per-price FIFO queue until it trades, is cancelled, or the engine is torn down.
//!
//! ## Key Features
//!
//! - **Allocation-free hot path**: resting orders live in fixed-capacity ring buffers that are pre-allocated at startup and recycled through a bounded pool as price levels appear and drain. Steady-state matching performs no heap allocation.
//!
//! - **Price-time priority**: executions always hit the best opposite price first, and within a price level strictly in arrival order. A partially filled resting order keeps its place at the head of its queue.
//!
//! - **Lazy cancellation**: cancelling marks an order ID; the order itself is discarded the next time the matching loop encounters it. Cancellation never searches the book and never blocks.
//!
//! - **Batch or streaming delivery**: executions either come back as the return value of each `process_order` call, or are pushed into a bounded channel consumed by a single reader, chosen at construction time.
//!
//! - **Loud failure on sizing faults**: queue overflow and pool exhaustion are design-constant violations. They are reported as fatal errors, never absorbed silently.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: every matched quantity produces exactly one execution, priced at the resting order's level.
//! 2. **Predictability**: all capacities are fixed up front; worst-case memory is known at construction.
//! 3. **Simplicity**: the engine is single-threaded and synchronous. Run one engine per instrument and pin each to a worker to scale out.
//!
//! ## Non-goals
//!
//! Market, stop, iceberg, IOC and FOK order types; multi-instrument routing; self-trade prevention; fees; auction phases; persistence and replay. The engine is the matching core only; transport, auditing and settlement are the embedder's business.

pub mod engine;

mod utils;

pub use engine::{
    BookSnapshot, Execution, ExecutionStream, LevelSnapshot, MatchEngine, MatchError, Order,
    OrderId, Side,
};
pub use utils::current_time_nanos;
