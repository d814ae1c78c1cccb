//! Boundary types: orders, executions and their identifiers.

use super::error::MatchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the book an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Bid side
    Buy,
    /// Ask side
    Sell,
}

impl Side {
    /// Returns the side this one matches against.
    pub fn opposite(&self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "Buy"),
            Side::Sell => write!(f, "Sell"),
        }
    }
}

impl TryFrom<u8> for Side {
    type Error = MatchError;

    /// Parses the wire encoding `b'B'` / `b'S'`.
    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            b'B' => Ok(Side::Buy),
            b'S' => Ok(Side::Sell),
            other => Err(MatchError::InvalidSide(other)),
        }
    }
}

/// Opaque order identifier assigned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        OrderId(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A limit order.
///
/// `quantity` is the only field the engine mutates; it is decremented as
/// fills occur. The engine takes orders by value, so the producer holds no
/// reference through which it could touch one after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Caller-assigned identifier, unique per instrument
    pub id: OrderId,
    /// Buy or sell
    pub side: Side,
    /// Limit price, must be positive
    pub price: i64,
    /// Open quantity, must be positive at entry
    pub quantity: i64,
    /// Submission time, nanoseconds since the UNIX epoch
    pub timestamp: i64,
}

impl Order {
    /// Builds an order stamped with the current time.
    pub fn new(id: impl Into<OrderId>, side: Side, price: i64, quantity: i64) -> Self {
        Self {
            id: id.into(),
            side,
            price,
            quantity,
            timestamp: crate::utils::current_time_nanos(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} @ {} (ts {})",
            self.id, self.side, self.quantity, self.price, self.timestamp
        )
    }
}

/// The record emitted when two orders match.
///
/// `price` is the resting (maker) order's price: the incoming taker accepts
/// the price already on the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Execution {
    /// Identifier of the buy order involved
    pub buy_order_id: OrderId,
    /// Identifier of the sell order involved
    pub sell_order_id: OrderId,
    /// Matched quantity
    pub quantity: i64,
    /// Maker's price
    pub price: i64,
    /// Execution time, nanoseconds since the UNIX epoch
    pub timestamp: i64,
}

impl fmt::Display for Execution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buy {} / sell {}: {} @ {} (ts {})",
            self.buy_order_id, self.sell_order_id, self.quantity, self.price, self.timestamp
        )
    }
}
