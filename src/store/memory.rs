use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Item, ItemId, ItemStore, StoreError};

/// In-memory [`ItemStore`] with store-assigned, auto-incremented ids.
///
/// Backs the tests and demos; embedders without a database can use it
/// directly.
pub struct MemoryStore {
    items: RwLock<HashMap<ItemId, Item>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            items: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Inserts a new record, assigning the next free id, and returns the
    /// stored representation.
    pub async fn create(&self, mut item: Item) -> Item {
        item.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.items.write().await.insert(item.id, item.clone());
        item
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn save(&self, item: Item) -> Result<Item, StoreError> {
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_all_ids(&self) -> Result<Vec<ItemId>, StoreError> {
        let mut ids: Vec<ItemId> = self.items.read().await.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
