//! # itembatch
//!
//! Concurrent batch processing for item records, built on Tokio.
//!
//! ## Features
//!
//! - **Bounded worker pool** created once and shared by every batch call
//! - **Partial-failure isolation** - missing or failing items are skipped
//!   without aborting the batch
//! - **Race-free aggregation** of per-item outcomes with a single
//!   completion signal
//! - **Backpressure** via a bounded submission queue
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use itembatch::batch::BatchProcessor;
//! use itembatch::pool::{ConfigBuilder, WorkerPool};
//! use itembatch::store::MemoryStore;
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryStore::new());
//! let config = Arc::new(ConfigBuilder::default().build()?);
//! let pool = Arc::new(WorkerPool::new(config));
//! let processor = BatchProcessor::new(store, pool);
//! // processor.process_batch(&ids).await resolves once every task finished
//! ```
//!
//! ## Modules
//!
//! - [`store`] - Item model and the persistence seam
//! - [`pool`] - Bounded, process-lifetime worker pool
//! - [`batch`] - Per-batch orchestration and outcome aggregation

pub mod batch;
pub mod pool;
pub mod store;
