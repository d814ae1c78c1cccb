//! Price-indexed ladder of FIFO levels for one side of the book.

use super::error::MatchError;
use super::pool::QueuePool;
use super::types::{Order, Side};
use std::collections::btree_map::{BTreeMap, Entry};
use tracing::trace;

use super::queue::OrderQueue;

/// All resting orders at one price on one side of the book.
///
/// A level exists in its ladder only while its queue is non-empty: it is
/// created by the first resting order at the price and retired, queue
/// returned to the pool, as soon as matching drains it.
#[derive(Debug)]
pub struct PriceLevel {
    price: i64,
    /// Resting orders in arrival order
    pub(super) orders: OrderQueue,
}

impl PriceLevel {
    fn new(price: i64, orders: OrderQueue) -> Self {
        Self { price, orders }
    }

    /// The price shared by every order in this level.
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Number of orders resting at this price.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Sum of open quantity resting at this price.
    pub fn total_quantity(&self) -> i64 {
        self.orders.iter().map(|order| order.quantity).sum()
    }

    /// Visits the resting orders in time-priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}

/// One side of the book: an ordered map from price to [`PriceLevel`].
///
/// The side only decides which end of the map is "best". Bids scan downward
/// from the highest price, asks upward from the lowest; keeping one ladder
/// per side means neither comparator nor traversal ever encodes the side.
#[derive(Debug)]
pub struct PriceLadder {
    side: Side,
    levels: BTreeMap<i64, PriceLevel>,
}

impl PriceLadder {
    /// Creates an empty ladder for `side`.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// The side this ladder holds.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Best price on this side, if any level is populated.
    pub fn best_price(&self) -> Option<i64> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    /// Existing level at `price`, or a fresh one backed by a queue checked
    /// out of `pool`.
    pub fn get_or_create(
        &mut self,
        price: i64,
        pool: &mut QueuePool,
    ) -> Result<&mut PriceLevel, MatchError> {
        match self.levels.entry(price) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let orders = pool.acquire()?;
                trace!("{} ladder: opening level at {}", self.side, price);
                Ok(entry.insert(PriceLevel::new(price, orders)))
            }
        }
    }

    /// Mutable access to the level at `price`, if present.
    pub fn level_mut(&mut self, price: i64) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Removes the drained level at `price` and hands its queue back to
    /// `pool`.
    ///
    /// # Panics
    ///
    /// Panics if no level exists at `price`. Levels are retired exactly
    /// once, by whoever drained them; a missing key means the book is
    /// corrupt.
    pub fn remove(&mut self, price: i64, pool: &mut QueuePool) {
        let level = self
            .levels
            .remove(&price)
            .unwrap_or_else(|| panic!("no {} level at {} to remove", self.side, price));
        debug_assert!(level.orders.is_empty(), "retiring a non-empty level");
        trace!("{} ladder: retiring level at {}", self.side, price);
        pool.release(level.orders);
    }

    /// Whether a level is populated at `price`.
    pub fn contains(&self, price: i64) -> bool {
        self.levels.contains_key(&price)
    }

    /// Number of populated price levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the ladder has no populated levels.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterates levels from the best price outward.
    pub fn iter_from_best(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }
}
