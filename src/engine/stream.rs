//! Execution delivery: a per-call batch or a bounded channel.

use super::error::MatchError;
use super::types::Execution;
use crossbeam_channel::{bounded, Receiver, Sender};

/// Where the matching loop writes finished executions.
///
/// Batch mode collects per call and the engine hands the vector back from
/// `process_order`. Channel mode forwards each execution to the consumer as
/// it is produced; a full channel blocks the engine until the consumer
/// drains, which is the backpressure story for a lagging reader.
#[derive(Debug)]
pub(super) enum ExecutionSink {
    Batch(Vec<Execution>),
    Channel(Sender<Execution>),
}

impl ExecutionSink {
    pub(super) fn batch() -> Self {
        ExecutionSink::Batch(Vec::new())
    }

    pub(super) fn channel(cap: usize) -> (Self, ExecutionStream) {
        let (sender, receiver) = bounded(cap);
        (ExecutionSink::Channel(sender), ExecutionStream { receiver })
    }

    pub(super) fn emit(&mut self, execution: Execution) -> Result<(), MatchError> {
        match self {
            ExecutionSink::Batch(pending) => {
                pending.push(execution);
                Ok(())
            }
            ExecutionSink::Channel(sender) => sender
                .send(execution)
                .map_err(|_| MatchError::StreamDisconnected),
        }
    }

    pub(super) fn drain_batch(&mut self) -> Vec<Execution> {
        match self {
            ExecutionSink::Batch(pending) => std::mem::take(pending),
            ExecutionSink::Channel(_) => Vec::new(),
        }
    }
}

/// Consumer handle for an engine built with
/// [`MatchEngine::with_execution_stream`](super::MatchEngine::with_execution_stream).
///
/// The engine is the only producer; hold one consumer and drain it faster
/// than the engine fills it.
#[derive(Debug, Clone)]
pub struct ExecutionStream {
    receiver: Receiver<Execution>,
}

impl ExecutionStream {
    /// Blocks until the next execution, or returns `None` once the engine
    /// has been dropped and the channel drained.
    pub fn recv(&self) -> Option<Execution> {
        self.receiver.recv().ok()
    }

    /// Returns the next execution only if one is already waiting.
    pub fn try_recv(&self) -> Option<Execution> {
        self.receiver.try_recv().ok()
    }

    /// Blocking iterator that ends when the engine side disconnects.
    pub fn iter(&self) -> impl Iterator<Item = Execution> + '_ {
        self.receiver.iter()
    }

    /// Number of executions waiting in the channel.
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Whether no executions are waiting.
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}
