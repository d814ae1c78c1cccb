//! Public order entry points: submission and cancellation.

use super::book::MatchEngine;
use super::error::MatchError;
use super::types::{Execution, Order, OrderId};
use tracing::trace;

impl MatchEngine {
    /// Validates and matches an incoming limit order.
    ///
    /// With batch delivery the returned vector holds the executions this
    /// call produced, best price first and FIFO within a price. With stream
    /// delivery they are pushed into the channel as they happen and the
    /// returned vector is empty.
    ///
    /// A caller error (`InvalidOrder`) leaves the book untouched. A fatal
    /// error ([`MatchError::is_fatal`]) means a sizing constant was
    /// exceeded mid-match; the book must then be discarded.
    pub fn process_order(&mut self, order: Order) -> Result<Vec<Execution>, MatchError> {
        if order.price <= 0 {
            return Err(MatchError::InvalidOrder {
                reason: format!("price must be positive, got {}", order.price),
            });
        }
        if order.quantity <= 0 {
            return Err(MatchError::InvalidOrder {
                reason: format!("quantity must be positive, got {}", order.quantity),
            });
        }

        trace!("processing {}", order);
        self.execute(order)?;
        Ok(self.sink.drain_batch())
    }

    /// Marks `id` for lazy cancellation and returns immediately.
    ///
    /// The resting order stays in its queue until the matching loop next
    /// encounters it, at which point it is discarded and the marker
    /// consumed. Cancelling an unknown or already-filled ID is harmless;
    /// the marker simply never gets consumed. Cancelling twice is the same
    /// as cancelling once.
    pub fn cancel_order(&mut self, id: impl Into<OrderId>) -> Result<(), MatchError> {
        let id = id.into();
        trace!("cancelling order {}", id);
        self.cancelled.insert(id);
        Ok(())
    }
}
