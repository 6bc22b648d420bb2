use thiserror::Error;

use crate::pool::PoolError;

/// Errors that fail an entire batch.
///
/// Per-item problems never appear here; the task that hits one converts it
/// to a skip and the batch keeps going.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The worker pool refused a task submission.
    #[error("worker pool rejected submission")]
    Pool(#[from] PoolError),

    /// The completion channel closed before the aggregator resolved.
    #[error("batch completion channel closed early")]
    CompletionChannelClosed,
}
