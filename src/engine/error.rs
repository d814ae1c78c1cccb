//! Matching engine error types

use super::types::Side;
use std::fmt;

/// Errors that can occur while feeding the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Side byte at the boundary was neither `b'B'` nor `b'S'`
    InvalidSide(u8),

    /// Order failed validation; the book is unchanged
    InvalidOrder {
        /// Which field was rejected and why
        reason: String,
    },

    /// No idle queue left for a new price level; `pool_size` is undersized
    PoolExhausted,

    /// A per-price queue rejected an order; `queue_size` is undersized
    QueueOverflow {
        /// Side of the full queue
        side: Side,
        /// Price level whose queue is full
        price: i64,
    },

    /// The execution stream consumer hung up
    StreamDisconnected,
}

impl MatchError {
    /// Whether this error signals a sizing fault or corruption.
    ///
    /// After a fatal error the book is no longer consistent: the embedder
    /// must discard the engine rather than keep feeding it orders. Caller
    /// errors (`InvalidSide`, `InvalidOrder`) leave the book untouched.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MatchError::PoolExhausted
                | MatchError::QueueOverflow { .. }
                | MatchError::StreamDisconnected
        )
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidSide(byte) => {
                write!(f, "invalid side byte: {:#04x}", byte)
            }
            MatchError::InvalidOrder { reason } => write!(f, "invalid order: {}", reason),
            MatchError::PoolExhausted => {
                write!(f, "queue pool exhausted: too many simultaneous price levels")
            }
            MatchError::QueueOverflow { side, price } => {
                write!(f, "order queue full at {} level {}", side, price)
            }
            MatchError::StreamDisconnected => {
                write!(f, "execution stream consumer disconnected")
            }
        }
    }
}

impl std::error::Error for MatchError {}
