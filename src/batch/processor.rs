use std::sync::Arc;

use tracing::warn;

use super::aggregator::{ResultAggregator, TaskOutcome};
use super::types::BatchError;
use crate::pool::WorkerPool;
use crate::store::{Item, ItemId, ItemStatus, ItemStore};

/// Orchestrates one concurrent batch run per call.
///
/// The worker pool is shared across calls (and across processors); every
/// call owns a private [`ResultAggregator`], so simultaneous batches never
/// mix results.
pub struct BatchProcessor<S> {
    store: Arc<S>,
    pool: Arc<WorkerPool>,
}

impl<S> BatchProcessor<S>
where
    S: ItemStore + 'static,
{
    pub fn new(store: Arc<S>, pool: Arc<WorkerPool>) -> Self {
        BatchProcessor { store, pool }
    }

    /// Processes every identifier in `ids` in parallel and resolves with the
    /// successfully processed items, sorted by id, once every task has
    /// reached a terminal state.
    ///
    /// Missing identifiers and per-item store faults are skipped and never
    /// fail the batch; duplicates in `ids` are submitted independently and
    /// produce one result entry each. The only error is a refused pool
    /// submission.
    pub async fn process_batch(&self, ids: &[ItemId]) -> Result<Vec<Item>, BatchError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let (aggregator, resolved) = ResultAggregator::new(ids.len());
        let aggregator = Arc::new(aggregator);

        for &id in ids {
            let store = Arc::clone(&self.store);
            let aggregator = Arc::clone(&aggregator);

            self.pool
                .submit(async move {
                    let outcome = Self::process_one(store.as_ref(), id).await;
                    aggregator.report(outcome);
                })
                .await?;
        }

        resolved
            .await
            .map_err(|_| BatchError::CompletionChannelClosed)
    }

    /// One per-item task: fetch, advance the status, save.
    ///
    /// Every failure path collapses to [`TaskOutcome::Skip`] so sibling
    /// tasks and the batch itself keep going.
    async fn process_one(store: &S, id: ItemId) -> TaskOutcome {
        let mut item = match store.find_by_id(id).await {
            Ok(Some(item)) => item,
            Ok(None) => return TaskOutcome::Skip,
            Err(err) => {
                warn!(id, error = %err, "item fetch failed, skipping");
                return TaskOutcome::Skip;
            }
        };

        // Full NEW -> PROCESSING -> PROCESSED walk, persisted once at the end.
        item.status = ItemStatus::Processing;
        item.status = ItemStatus::Processed;

        match store.save(item).await {
            Ok(saved) => TaskOutcome::Success(saved),
            Err(err) => {
                warn!(id, error = %err, "item save failed, skipping");
                TaskOutcome::Skip
            }
        }
    }
}
