pub mod item;
pub mod memory;

pub use item::{Item, ItemId, ItemStatus, ParseStatusError};
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by an [`ItemStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store failed.
    ///
    /// Preserves the source error for debugging.
    #[error("store backend failed")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Persistence seam for items.
///
/// The batch processor is generic over this trait; it never creates or
/// deletes records, it only fetches them and writes back a status change.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Looks up one item, `None` when the id has no backing record.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Persists an item and returns the stored representation, including
    /// any store-assigned fields.
    async fn save(&self, item: Item) -> Result<Item, StoreError>;

    /// Identifiers of every known item. Used by callers to build a
    /// "process everything" batch; not used by the processor itself.
    async fn find_all_ids(&self) -> Result<Vec<ItemId>, StoreError>;
}
