//! # In-Memory Catalog Store
//!
//! [`CatalogStore`] double for tests and local development. Holds the
//! four collections behind a `parking_lot::RwLock` so test setups can
//! mutate state between assertions while readers stay `&self`.
//!
//! Activity-log reads sort by timestamp descending before truncating, so
//! the double honors the hosted service's recency ordering regardless of
//! insertion order.

use async_trait::async_trait;
use parking_lot::RwLock;

use medcert_core::{ActivityLogEntry, Category, Certificate, Product};

use crate::error::StoreError;
use crate::CatalogStore;

#[derive(Debug, Default)]
struct MemoryState {
    certificates: Vec<Certificate>,
    categories: Vec<Category>,
    products: Vec<Product>,
    activity_log: Vec<ActivityLogEntry>,
}

/// In-memory [`CatalogStore`] implementation.
#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    state: RwLock<MemoryState>,
}

impl MemoryCatalogStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with catalog collections.
    pub fn with_catalog(
        certificates: Vec<Certificate>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            state: RwLock::new(MemoryState {
                certificates,
                categories,
                products,
                activity_log: Vec::new(),
            }),
        }
    }

    /// Replace the certificate collection.
    pub fn set_certificates(&self, certificates: Vec<Certificate>) {
        self.state.write().certificates = certificates;
    }

    /// Replace the category collection.
    pub fn set_categories(&self, categories: Vec<Category>) {
        self.state.write().categories = categories;
    }

    /// Replace the product collection.
    pub fn set_products(&self, products: Vec<Product>) {
        self.state.write().products = products;
    }

    /// Append an activity-log entry.
    pub fn push_log(&self, entry: ActivityLogEntry) {
        self.state.write().activity_log.push(entry);
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn fetch_certificates(&self) -> Result<Vec<Certificate>, StoreError> {
        Ok(self.state.read().certificates.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.state.read().categories.clone())
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.state.read().products.clone())
    }

    async fn fetch_activity_log(
        &self,
        limit: usize,
    ) -> Result<Vec<ActivityLogEntry>, StoreError> {
        let mut entries = self.state.read().activity_log.clone();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries.truncate(limit);
        Ok(entries)
    }
}
