use std::sync::Arc;

use crate::auth::{AccessGuard, AuthMode};
use crate::config::Config;
use crate::domain::menu::Catalog;
use crate::domain::order::OrderLedger;
use crate::metrics::Metrics;
use crate::store::{DocumentStore, MemoryStore, RedisStore};

// ============================================================================
// Application State - Wired Components Shared Across Workers
// ============================================================================

pub struct AppState {
    pub catalog: Catalog,
    pub ledger: OrderLedger,
    pub guard: AccessGuard,
    pub metrics: Arc<Metrics>,
    pub menu_page_size: usize,
}

impl AppState {
    /// Build the full component graph from configuration: pick the store
    /// backend, seed the catalog, and fix the auth mode for the process
    /// lifetime.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store: Arc<dyn DocumentStore> = match &config.redis_url {
            Some(url) => Arc::new(RedisStore::connect(url).await?),
            None => {
                tracing::info!("REDIS_URL not set, using in-memory store");
                Arc::new(MemoryStore::new())
            }
        };

        let metrics = Arc::new(Metrics::new()?);

        let catalog = Catalog::new(store.clone());
        catalog.ensure_seeded().await?;

        let ledger = OrderLedger::new(store, metrics.clone());

        let guard = AccessGuard::new(AuthMode::from_secret(config.admin_password.clone()));
        match guard.mode() {
            AuthMode::Open => {
                tracing::warn!("ADMIN_PASSWORD not set, administrative routes are open")
            }
            AuthMode::SharedSecret(_) => {
                tracing::info!("Administrative routes require the shared secret")
            }
        }

        Ok(Self {
            catalog,
            ledger,
            guard,
            metrics,
            menu_page_size: config.menu_page_size,
        })
    }
}
