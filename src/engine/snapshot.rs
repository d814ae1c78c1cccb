//! Point-in-time depth view of the book.

use super::ladder::PriceLevel;
use serde::{Deserialize, Serialize};

/// Aggregate of one price level at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// Level price
    pub price: i64,

    /// Number of orders resting at this price
    pub order_count: usize,

    /// Sum of open quantity resting at this price
    pub total_quantity: i64,
}

impl From<&PriceLevel> for LevelSnapshot {
    fn from(level: &PriceLevel) -> Self {
        Self {
            price: level.price(),
            order_count: level.order_count(),
            total_quantity: level.total_quantity(),
        }
    }
}

/// A snapshot of the book's top levels at a specific point in time.
///
/// Bids are ordered best (highest price) first, asks best (lowest price)
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// When the snapshot was taken, nanoseconds since the UNIX epoch
    pub timestamp: i64,

    /// Bid levels, best first
    pub bids: Vec<LevelSnapshot>,

    /// Ask levels, best first
    pub asks: Vec<LevelSnapshot>,
}

impl BookSnapshot {
    /// Best bid price and its resting quantity.
    pub fn best_bid(&self) -> Option<(i64, i64)> {
        self.bids
            .first()
            .map(|level| (level.price, level.total_quantity))
    }

    /// Best ask price and its resting quantity.
    pub fn best_ask(&self) -> Option<(i64, i64)> {
        self.asks
            .first()
            .map(|level| (level.price, level.total_quantity))
    }

    /// Total resting quantity across the captured bid levels.
    pub fn total_bid_quantity(&self) -> i64 {
        self.bids.iter().map(|level| level.total_quantity).sum()
    }

    /// Total resting quantity across the captured ask levels.
    pub fn total_ask_quantity(&self) -> i64 {
        self.asks.iter().map(|level| level.total_quantity).sum()
    }
}
