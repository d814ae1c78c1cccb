//! Fixed arena of order queues backing the price levels.

use super::error::MatchError;
use super::queue::OrderQueue;

/// Pre-allocated pool of [`OrderQueue`]s.
///
/// A queue is checked out when a new price level appears and returned when
/// that level drains, so the number of idle queues plus the number of
/// populated levels is constant. The pool never grows: running out means
/// `pool_size` was below the instrument's peak level count, which is a
/// sizing fault.
#[derive(Debug)]
pub struct QueuePool {
    idle: Vec<OrderQueue>,
    size: usize,
}

impl QueuePool {
    /// Builds a pool of `pool_size` queues, each with `queue_size` slots.
    ///
    /// # Panics
    ///
    /// Panics if `pool_size` is zero, or if `queue_size` is below 64 or not
    /// a power of two.
    pub fn new(pool_size: usize, queue_size: usize) -> Self {
        assert!(pool_size >= 1, "pool must hold at least one queue");
        assert!(
            queue_size >= 64 && queue_size.is_power_of_two(),
            "queue size must be a power of two, at least 64"
        );
        let idle = (0..pool_size).map(|_| OrderQueue::new(queue_size)).collect();
        Self {
            idle,
            size: pool_size,
        }
    }

    /// Checks a queue out of the pool, reset and ready for use.
    pub fn acquire(&mut self) -> Result<OrderQueue, MatchError> {
        let mut queue = self.idle.pop().ok_or(MatchError::PoolExhausted)?;
        queue.reset();
        Ok(queue)
    }

    /// Places a queue back into the idle set.
    pub fn release(&mut self, queue: OrderQueue) {
        self.idle.push(queue);
    }

    /// Number of queues currently idle.
    pub fn available(&self) -> usize {
        self.idle.len()
    }

    /// Total number of queues owned by the pool.
    pub fn size(&self) -> usize {
        self.size
    }
}
