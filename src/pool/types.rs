use thiserror::Error;

/// Errors that can occur when handing work to the pool.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// The pool is closed and accepts no further submissions.
    #[error("worker pool closed")]
    Closed,
}
