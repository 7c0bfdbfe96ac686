use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::store::{DocumentStore, StoreError};

use super::value_objects::{default_menu, MenuItem};

// ============================================================================
// Catalog - Paginated, Searchable Menu Reads
// ============================================================================
//
// Read model over the menu collection. Every public read first guarantees
// the catalog is seeded: an empty backing store receives the default menu
// exactly once per process (a failed seed attempt is retried on the next
// read, a successful one never repeats).
//
// Pagination is 1-indexed; a page below 1 is clamped to 1 and a page past
// the end yields an empty slice rather than an error. Search is a
// case-insensitive substring match against name or description.
//
// ============================================================================

pub struct Catalog {
    store: Arc<dyn DocumentStore>,
    seeded: OnceCell<()>,
}

impl Catalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            seeded: OnceCell::new(),
        }
    }

    /// Seed the default menu if the backing collection is empty. Idempotent.
    pub async fn ensure_seeded(&self) -> Result<(), StoreError> {
        self.seeded
            .get_or_try_init(|| async {
                if self.store.count_menu_items().await? == 0 {
                    let items = default_menu();
                    for item in &items {
                        self.store.put_menu_item(item).await?;
                    }
                    tracing::info!(item_count = items.len(), "🌱 Seeded empty menu catalog");
                }
                Ok(())
            })
            .await
            .map(|_| ())
    }

    /// The `page`-th slice (1-indexed) of all items in insertion order.
    pub async fn list_items(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<MenuItem>, StoreError> {
        self.ensure_seeded().await?;
        let items = self.store.list_menu_items().await?;
        Ok(paginate(items, page, page_size))
    }

    /// Case-insensitive substring search over name and description, with the
    /// same pagination rules as `list_items`.
    pub async fn search_items(
        &self,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<MenuItem>, StoreError> {
        let matches = self.matching(query).await?;
        Ok(paginate(matches, page, page_size))
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        self.ensure_seeded().await?;
        self.store.count_menu_items().await
    }

    pub async fn search_count(&self, query: &str) -> Result<usize, StoreError> {
        Ok(self.matching(query).await?.len())
    }

    /// Total page count for `total` items, `ceil(total / page_size)`.
    pub fn page_count(total: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        total.div_ceil(page_size)
    }

    async fn matching(&self, query: &str) -> Result<Vec<MenuItem>, StoreError> {
        self.ensure_seeded().await?;
        let needle = query.to_lowercase();
        Ok(self
            .store
            .list_menu_items()
            .await?
            .into_iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .collect())
    }
}

fn paginate(items: Vec<MenuItem>, page: usize, page_size: usize) -> Vec<MenuItem> {
    // Page is 1-indexed. Saturating math keeps extreme page values in
    // range: page 0 reads as page 1, a huge page yields an empty slice.
    let offset = page.saturating_sub(1).saturating_mul(page_size);
    items.into_iter().skip(offset).take(page_size).collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
