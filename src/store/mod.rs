// Private module declarations
mod memory;
mod redis;

// Re-export for public API
pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

use async_trait::async_trait;
use ::redis::RedisError;

use crate::domain::menu::MenuItem;
use crate::domain::order::Order;

// ============================================================================
// Document Store - Persistence Port
// ============================================================================
//
// Storage abstraction behind the Catalog and the Order Ledger. Two record
// sets, "menu items" and "orders", each keyed by id with no cross-collection
// foreign keys.
//
// Responsibilities:
// 1. Persist menu items and orders as JSON documents
// 2. Preserve insertion order so listings and pagination stay stable
// 3. Surface backend failures as StoreError (no retry loops at this layer;
//    transient-error handling belongs to the caller)
//
// Backends:
// - `MemoryStore`: process-local, used in tests and when REDIS_URL is unset
// - `RedisStore`: documents in Redis hashes, survives restarts
//
// ============================================================================

/// Infrastructure failure from the backing store, distinct from domain
/// validation errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("backing store unavailable: {0}")]
    Backend(#[from] RedisError),

    #[error("stored document is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_menu_item(&self, id: &str) -> Result<Option<MenuItem>, StoreError>;

    /// All menu items in insertion order.
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, StoreError>;

    async fn count_menu_items(&self) -> Result<usize, StoreError>;

    /// Upsert keyed by `item.id`; an existing document keeps its position.
    async fn put_menu_item(&self, item: &MenuItem) -> Result<(), StoreError>;

    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError>;

    /// All orders in insertion order.
    async fn list_orders(&self) -> Result<Vec<Order>, StoreError>;

    /// Upsert keyed by `order.id`; an existing document keeps its position.
    async fn put_order(&self, order: &Order) -> Result<(), StoreError>;

    /// Drops every order. Test/bench isolation only; menu items are kept.
    async fn clear_orders(&self) -> Result<(), StoreError>;
}
