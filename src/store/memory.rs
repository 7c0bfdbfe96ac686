use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::menu::MenuItem;
use crate::domain::order::Order;

use super::{DocumentStore, StoreError};

// ============================================================================
// In-Memory Store
// ============================================================================
//
// Default backend when REDIS_URL is unset. Vec-backed so listings keep
// insertion order; an upsert replaces the existing document in place.
// State lives only as long as the process.
//
// ============================================================================

#[derive(Default)]
pub struct MemoryStore {
    menu: RwLock<Vec<MenuItem>>,
    orders: RwLock<Vec<Order>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_menu_item(&self, id: &str) -> Result<Option<MenuItem>, StoreError> {
        let menu = self.menu.read().await;
        Ok(menu.iter().find(|item| item.id == id).cloned())
    }

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, StoreError> {
        Ok(self.menu.read().await.clone())
    }

    async fn count_menu_items(&self) -> Result<usize, StoreError> {
        Ok(self.menu.read().await.len())
    }

    async fn put_menu_item(&self, item: &MenuItem) -> Result<(), StoreError> {
        let mut menu = self.menu.write().await;
        match menu.iter().position(|existing| existing.id == item.id) {
            Some(index) => menu[index] = item.clone(),
            None => menu.push(item.clone()),
        }
        Ok(())
    }

    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|order| order.id == id).cloned())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.read().await.clone())
    }

    async fn put_order(&self, order: &Order) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;
        match orders.iter().position(|existing| existing.id == order.id) {
            Some(index) => orders[index] = order.clone(),
            None => orders.push(order.clone()),
        }
        Ok(())
    }

    async fn clear_orders(&self) -> Result<(), StoreError> {
        self.orders.write().await.clear();
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
