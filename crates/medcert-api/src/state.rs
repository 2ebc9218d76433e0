//! # Application State
//!
//! Shared state for the Axum application: the injected catalog store.
//! Handlers fetch a fresh [`CatalogSnapshot`] per request — the catalog
//! is small and the hosted service is the source of truth, so there is
//! no server-side cache to invalidate.

use std::sync::Arc;

use medcert_resolve::CatalogSnapshot;
use medcert_store::{CatalogStore, StoreError};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The injected catalog store (hosted client in production, memory
    /// store in tests).
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    /// Create application state over a catalog store.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Fetch the three catalog collections into a resolution snapshot.
    pub async fn snapshot(&self) -> Result<CatalogSnapshot, StoreError> {
        let certificates = self.store.fetch_certificates().await?;
        let categories = self.store.fetch_categories().await?;
        let products = self.store.fetch_products().await?;
        Ok(CatalogSnapshot::new(certificates, categories, products))
    }
}
