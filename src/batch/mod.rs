pub mod aggregator;
pub mod processor;
pub mod types;

pub use aggregator::{ResultAggregator, TaskOutcome};
pub use processor::BatchProcessor;
pub use types::BatchError;
