//! Matching engine implementation: price ladders, queue arena and the cross loop.

pub mod book;
pub mod error;
pub mod ladder;
pub mod matching;
pub mod operations;
pub mod pool;
pub mod queue;
pub mod snapshot;
pub mod stream;
pub mod types;
mod tests;

pub use book::MatchEngine;
pub use error::MatchError;
pub use snapshot::{BookSnapshot, LevelSnapshot};
pub use stream::ExecutionStream;
pub use types::{Execution, Order, OrderId, Side};
