use std::sync::Mutex;

use tokio::sync::oneshot;

use crate::store::Item;

/// Terminal outcome of one per-item task.
#[derive(Debug)]
pub enum TaskOutcome {
    /// The item was fetched, processed and saved.
    Success(Item),
    /// The item was missing, or its task hit a recovered fault. Counts
    /// toward completion, contributes nothing to the result.
    Skip,
}

/// Per-batch fan-in for task outcomes.
///
/// One instance per `process_batch` call. A single mutex guards both the
/// result set and the completion counter, so inserting an item and checking
/// for completion are one critical section: two tasks finishing at the same
/// time cannot both decide they are last, and no success can land between
/// the final count and the completion signal.
pub struct ResultAggregator {
    expected: usize,
    inner: Mutex<Inner>,
}

struct Inner {
    items: Vec<Item>,
    completed: usize,
    resolve: Option<oneshot::Sender<Vec<Item>>>,
}

impl ResultAggregator {
    /// Creates an aggregator expecting `expected` reports, paired with the
    /// receiver that resolves once the last one arrived.
    pub fn new(expected: usize) -> (Self, oneshot::Receiver<Vec<Item>>) {
        let (tx, rx) = oneshot::channel();
        let aggregator = ResultAggregator {
            expected,
            inner: Mutex::new(Inner {
                items: Vec::new(),
                completed: 0,
                resolve: Some(tx),
            }),
        };
        (aggregator, rx)
    }

    pub fn report_success(&self, item: Item) {
        self.report(TaskOutcome::Success(item));
    }

    pub fn report_skip(&self) {
        self.report(TaskOutcome::Skip);
    }

    /// Records one terminal task. No await happens under the lock.
    pub fn report(&self, outcome: TaskOutcome) {
        let mut inner = self.inner.lock().expect("aggregator lock poisoned");

        if let TaskOutcome::Success(item) = outcome {
            inner.items.push(item);
        }
        inner.completed += 1;

        if inner.completed == self.expected {
            // Sorted by id so the result is deterministic for a given input set.
            inner.items.sort_by_key(|item| item.id);
            if let Some(resolve) = inner.resolve.take() {
                let _ = resolve.send(inner.items.clone());
            }
        }
    }

    /// Finalized result, or `None` while any task is still outstanding.
    ///
    /// Callers normally consume the resolved receiver instead; this exists
    /// so nothing can observe a partial result by accident.
    pub fn snapshot(&self) -> Option<Vec<Item>> {
        let inner = self.inner.lock().expect("aggregator lock poisoned");
        if inner.completed == self.expected {
            Some(inner.items.clone())
        } else {
            None
        }
    }
}
