//! The price-priority / time-priority cross loop.

use super::book::MatchEngine;
use super::error::MatchError;
use super::types::{Execution, Order, Side};
use crate::utils::current_time_nanos;
use tracing::trace;

impl MatchEngine {
    /// Matches `taker` against the opposite ladder from the best price
    /// outward, then rests whatever is left on its own side.
    ///
    /// Executions print at the maker's price; the taker's limit only gates
    /// whether a level still crosses.
    pub(super) fn execute(&mut self, mut taker: Order) -> Result<(), MatchError> {
        while taker.quantity > 0 {
            let opposite = match taker.side {
                Side::Buy => &mut self.asks,
                Side::Sell => &mut self.bids,
            };

            let Some(level_price) = opposite.best_price() else {
                break;
            };

            let crosses = match taker.side {
                Side::Buy => taker.price >= level_price,
                Side::Sell => taker.price <= level_price,
            };
            if !crosses {
                break;
            }

            let level = opposite
                .level_mut(level_price)
                .expect("best price without a level");

            // Drain the level in arrival order.
            while taker.quantity > 0 {
                let Some(mut maker) = level.orders.pop_front() else {
                    break;
                };

                // Lazy cancellation: a cancelled maker is dropped the first
                // time it surfaces, and the marker is consumed with it.
                if self.cancelled.remove(&maker.id) {
                    trace!("discarding cancelled order {}", maker.id);
                    continue;
                }

                let fill = taker.quantity.min(maker.quantity);
                maker.quantity -= fill;
                taker.quantity -= fill;

                let (buy_order_id, sell_order_id) = match taker.side {
                    Side::Buy => (taker.id.clone(), maker.id.clone()),
                    Side::Sell => (maker.id.clone(), taker.id.clone()),
                };

                self.sink.emit(Execution {
                    buy_order_id,
                    sell_order_id,
                    quantity: fill,
                    price: level_price,
                    timestamp: current_time_nanos(),
                })?;
                self.last_trade_price = Some(level_price);

                if maker.quantity > 0 {
                    // Head re-queue: the maker keeps its place in line.
                    if !level.orders.push_front(maker) {
                        return Err(MatchError::QueueOverflow {
                            side: taker.side.opposite(),
                            price: level_price,
                        });
                    }
                }
            }

            if level.orders.is_empty() {
                opposite.remove(level_price, &mut self.pool);
            }
        }

        if taker.quantity > 0 {
            self.rest(taker)?;
        }

        Ok(())
    }

    /// Parks the unmatched remainder at the tail of its price level,
    /// opening the level if this is the first order resting there.
    fn rest(&mut self, order: Order) -> Result<(), MatchError> {
        let (side, price) = (order.side, order.price);
        trace!("resting {}", order);

        let ladder = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let level = ladder.get_or_create(price, &mut self.pool)?;
        if !level.orders.push_back(order) {
            return Err(MatchError::QueueOverflow { side, price });
        }
        Ok(())
    }
}
