pub mod config;
pub mod types;

pub use config::{Config, ConfigBuilder};
pub use types::PoolError;

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

type Job = BoxFuture<'static, ()>;

/// Bounded set of worker tasks sharing one submission queue.
///
/// Created once at process start and reused by every batch call; jobs queue
/// on the bounded channel when all workers are busy, which is what bounds
/// concurrency and provides backpressure. There is no priority ordering
/// among queued jobs.
pub struct WorkerPool {
    sender: mpsc::Sender<Job>,
    done: CancellationToken,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl WorkerPool {
    pub fn new(config: Arc<Config>) -> Self {
        let (sender, receiver) = mpsc::channel(config.queue_capacity);
        let receiver = Arc::new(Mutex::new(receiver));
        let done = CancellationToken::new();

        let mut handles = Vec::with_capacity(config.worker_num);
        for worker_id in 0..config.worker_num {
            let receiver = Arc::clone(&receiver);
            let done = done.clone();

            handles.push(tokio::spawn(async move {
                Self::worker(worker_id, receiver, done).await;
            }));
        }

        Self {
            sender,
            done,
            handles: Mutex::new(handles),
        }
    }

    /// Queues a job for execution, suspending while the queue is full.
    ///
    /// Fails with [`PoolError::Closed`] once the pool has been closed.
    pub async fn submit<F>(&self, job: F) -> Result<(), PoolError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.done.is_cancelled() {
            return Err(PoolError::Closed);
        }
        self.sender
            .send(Box::pin(job))
            .await
            .map_err(|_| PoolError::Closed)
    }

    /// Stops intake. Workers finish their current job, drain what is
    /// already queued and exit.
    pub fn close(&self) {
        self.done.cancel();
    }

    /// Closes the pool and waits for every worker to exit.
    pub async fn shutdown(&self) {
        self.close();
        let handles = {
            let mut guard = self.handles.lock().await;
            std::mem::take(&mut *guard)
        };
        for handle in handles {
            let _ = handle.await;
        }
    }

    async fn worker(
        worker_id: usize,
        receiver: Arc<Mutex<mpsc::Receiver<Job>>>,
        done: CancellationToken,
    ) {
        loop {
            tokio::select! {
                _ = done.cancelled() => {
                    Self::drain(&receiver).await;
                    debug!(worker_id, "worker shutting down");
                    return;
                }

                job = async {
                    let mut rx = receiver.lock().await;
                    rx.recv().await
                } => {
                    match job {
                        Some(job) => job.await,
                        None => {
                            debug!(worker_id, "job channel closed");
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Runs whatever is still queued at shutdown.
    async fn drain(receiver: &Mutex<mpsc::Receiver<Job>>) {
        loop {
            let job = { receiver.lock().await.try_recv().ok() };
            match job {
                Some(job) => job.await,
                None => break,
            }
        }
    }
}
