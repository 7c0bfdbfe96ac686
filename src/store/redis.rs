use std::time::Duration;

use async_trait::async_trait;
use redis::{
    aio::{ConnectionManager, ConnectionManagerConfig},
    AsyncCommands, Client,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::menu::MenuItem;
use crate::domain::order::Order;

use super::{DocumentStore, StoreError};

// ============================================================================
// Redis Store
// ============================================================================
//
// Documents live in Redis hashes keyed by id; a companion list records
// insertion order so listings page the same way the in-memory backend does.
//
// Key layout:
// - menu:docs    hash  id -> MenuItem JSON
// - menu:ids     list  menu ids, insertion order
// - orders:docs  hash  id -> Order JSON
// - orders:ids   list  order ids, insertion order
//
// ============================================================================

const MENU_DOCS: &str = "menu:docs";
const MENU_IDS: &str = "menu:ids";
const ORDER_DOCS: &str = "orders:docs";
const ORDER_IDS: &str = "orders:ids";

pub struct RedisStore {
    connection: ConnectionManager,
}

impl RedisStore {
    /// Connect with a bounded connection timeout so startup fails fast when
    /// Redis is unreachable instead of hanging.
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let config = ConnectionManagerConfig::new()
            .set_number_of_retries(1)
            .set_connection_timeout(Duration::from_millis(500));

        let client = Client::open(redis_url)?;
        let connection = client.get_connection_manager_with_config(config).await?;

        tracing::info!("Connected to Redis document store");
        Ok(Self { connection })
    }

    async fn fetch_one<T: DeserializeOwned>(
        &self,
        docs_key: &str,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        let mut conn = self.connection.clone();
        let raw: Option<String> = conn.hget(docs_key, id).await?;
        raw.map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(StoreError::from)
    }

    async fn fetch_all<T: DeserializeOwned>(
        &self,
        docs_key: &str,
        ids_key: &str,
    ) -> Result<Vec<T>, StoreError> {
        let mut conn = self.connection.clone();
        let ids: Vec<String> = conn.lrange(ids_key, 0, -1).await?;

        let mut documents = Vec::with_capacity(ids.len());
        for id in ids {
            let raw: Option<String> = conn.hget(docs_key, &id).await?;
            if let Some(json) = raw {
                documents.push(serde_json::from_str(&json)?);
            }
        }
        Ok(documents)
    }

    async fn store_document<T: Serialize>(
        &self,
        docs_key: &str,
        ids_key: &str,
        id: &str,
        document: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(document)?;
        let mut conn = self.connection.clone();
        // HSET reports the number of newly created fields, so 1 means this is
        // a first insert and the id joins the ordering list.
        let added: i64 = conn.hset(docs_key, id, json).await?;
        if added == 1 {
            let _: i64 = conn.rpush(ids_key, id).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for RedisStore {
    async fn get_menu_item(&self, id: &str) -> Result<Option<MenuItem>, StoreError> {
        self.fetch_one(MENU_DOCS, id).await
    }

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, StoreError> {
        self.fetch_all(MENU_DOCS, MENU_IDS).await
    }

    async fn count_menu_items(&self) -> Result<usize, StoreError> {
        let mut conn = self.connection.clone();
        let count: i64 = conn.llen(MENU_IDS).await?;
        Ok(count as usize)
    }

    async fn put_menu_item(&self, item: &MenuItem) -> Result<(), StoreError> {
        self.store_document(MENU_DOCS, MENU_IDS, &item.id, item).await
    }

    async fn get_order(&self, id: &str) -> Result<Option<Order>, StoreError> {
        self.fetch_one(ORDER_DOCS, id).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, StoreError> {
        self.fetch_all(ORDER_DOCS, ORDER_IDS).await
    }

    async fn put_order(&self, order: &Order) -> Result<(), StoreError> {
        self.store_document(ORDER_DOCS, ORDER_IDS, &order.id, order).await
    }

    async fn clear_orders(&self) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        let _: i64 = conn.del((ORDER_DOCS, ORDER_IDS)).await?;
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
