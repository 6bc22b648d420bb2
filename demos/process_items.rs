//! Seeds an in-memory store and runs one concurrent batch over every item.
//!
//! ```sh
//! cargo run --example process_items
//! ```

use std::sync::Arc;

use itembatch::batch::BatchProcessor;
use itembatch::pool::{ConfigBuilder, WorkerPool};
use itembatch::store::{Item, ItemStore, MemoryStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let store = Arc::new(MemoryStore::new());
    for i in 1..=8 {
        let item = Item::new(
            format!("item_{i}"),
            format!("demo item {i}"),
            format!("item_{i}@example.com"),
        );
        store.create(item).await;
    }

    let config = Arc::new(ConfigBuilder::default().worker_num(4usize).build()?);
    let pool = Arc::new(WorkerPool::new(config));
    let processor = BatchProcessor::new(Arc::clone(&store), Arc::clone(&pool));

    let ids = store.find_all_ids().await?;
    let processed = processor.process_batch(&ids).await?;

    for item in &processed {
        println!("{:>3}  {}  {}", item.id, item.name, item.status);
    }

    pool.shutdown().await;
    Ok(())
}
