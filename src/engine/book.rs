//! Engine state, constructors and read-only book views.

use super::ladder::PriceLadder;
use super::pool::QueuePool;
use super::snapshot::{BookSnapshot, LevelSnapshot};
use super::stream::{ExecutionSink, ExecutionStream};
use super::types::{OrderId, Side};
use crate::utils::current_time_nanos;
use std::collections::HashSet;
use tracing::trace;

/// A matching engine for a single instrument.
///
/// The engine is single-threaded and synchronous: `process_order` runs to
/// completion before the next call, and every piece of state is owned
/// exclusively by the engine. To parallelise across instruments, run one
/// engine per instrument, each pinned to its own worker.
pub struct MatchEngine {
    /// Resting buy orders; best price is the highest
    pub(super) bids: PriceLadder,

    /// Resting sell orders; best price is the lowest
    pub(super) asks: PriceLadder,

    /// Idle queues lent to price levels as they appear
    pub(super) pool: QueuePool,

    /// IDs cancelled but not yet consumed by the matching loop
    pub(super) cancelled: HashSet<OrderId>,

    /// Where finished executions go: a per-call batch or a bounded channel
    pub(super) sink: ExecutionSink,

    /// Price of the most recent execution
    pub(super) last_trade_price: Option<i64>,
}

impl MatchEngine {
    /// Creates an engine that returns each call's executions as a batch.
    ///
    /// `pool_size` bounds the number of simultaneously populated price
    /// levels across both sides; `queue_size` bounds the number of resting
    /// orders per level.
    ///
    /// # Panics
    ///
    /// Panics if `pool_size` is zero, or if `queue_size` is below 64 or not
    /// a power of two.
    pub fn new(pool_size: usize, queue_size: usize) -> Self {
        Self::build(pool_size, queue_size, ExecutionSink::batch())
    }

    /// Creates an engine that pushes executions into a bounded channel as
    /// they are produced, together with the consumer handle.
    ///
    /// The channel holds up to `stream_cap` undelivered executions; once it
    /// is full, `process_order` blocks until the consumer catches up. Size
    /// `stream_cap` for burst absorption, since the wait cannot be
    /// cancelled.
    ///
    /// # Panics
    ///
    /// Same sizing rules as [`MatchEngine::new`].
    pub fn with_execution_stream(
        pool_size: usize,
        queue_size: usize,
        stream_cap: usize,
    ) -> (Self, ExecutionStream) {
        let (sink, stream) = ExecutionSink::channel(stream_cap);
        (Self::build(pool_size, queue_size, sink), stream)
    }

    fn build(pool_size: usize, queue_size: usize, sink: ExecutionSink) -> Self {
        trace!(
            "creating engine: pool_size={}, queue_size={}",
            pool_size, queue_size
        );
        Self {
            bids: PriceLadder::new(Side::Buy),
            asks: PriceLadder::new(Side::Sell),
            pool: QueuePool::new(pool_size, queue_size),
            cancelled: HashSet::with_capacity(1024),
            sink,
            last_trade_price: None,
        }
    }

    /// Highest resting buy price, if any.
    pub fn best_bid(&self) -> Option<i64> {
        self.bids.best_price()
    }

    /// Lowest resting sell price, if any.
    pub fn best_ask(&self) -> Option<i64> {
        self.asks.best_price()
    }

    /// Best ask minus best bid.
    pub fn spread(&self) -> Option<i64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Midpoint of the best bid and best ask.
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Price of the most recent execution, if any has occurred.
    pub fn last_trade_price(&self) -> Option<i64> {
        self.last_trade_price
    }

    /// Number of populated price levels on `side`.
    pub fn level_count(&self, side: Side) -> usize {
        match side {
            Side::Buy => self.bids.len(),
            Side::Sell => self.asks.len(),
        }
    }

    /// Number of idle queues left in the pool.
    ///
    /// Together with [`MatchEngine::level_count`] this always sums to the
    /// configured `pool_size`.
    pub fn available_queues(&self) -> usize {
        self.pool.available()
    }

    /// Snapshot of the top `depth` levels on each side.
    ///
    /// Bids come back best (highest) first, asks best (lowest) first.
    pub fn snapshot(&self, depth: usize) -> BookSnapshot {
        trace!("snapshotting book to depth {}", depth);
        let bids = self
            .bids
            .iter_from_best()
            .take(depth)
            .map(LevelSnapshot::from)
            .collect();
        let asks = self
            .asks
            .iter_from_best()
            .take(depth)
            .map(LevelSnapshot::from)
            .collect();
        BookSnapshot {
            timestamp: current_time_nanos(),
            bids,
            asks,
        }
    }
}
