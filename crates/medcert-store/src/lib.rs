//! # medcert-store — Data-Access Layer
//!
//! The boundary between the compliance core and the hosted relational
//! data service backing the site. Everything above this crate reads the
//! catalog through the [`CatalogStore`] trait, so the store can be
//! swapped without touching resolution or report assembly.
//!
//! ## Implementations
//!
//! - [`HttpCatalogStore`] — production client for the hosted service's
//!   REST surface (bearer-key auth, per-request timeout, transport-error
//!   retry with exponential backoff).
//! - [`MemoryCatalogStore`] — in-memory double for tests and local
//!   development. This replaces the legacy module-level key-value
//!   fallback: the repository is always an explicit, injected value.
//!
//! ## Error Handling
//!
//! All fetches return [`StoreError`]. Not-found semantics do NOT live
//! here — a missing row is simply absent from the fetched collection;
//! only transport, API-status, deserialization, and configuration
//! failures are errors.

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
mod retry;

pub use config::{ApiKey, ConfigError, StoreConfig};
pub use error::StoreError;
pub use http::HttpCatalogStore;
pub use memory::MemoryCatalogStore;

use async_trait::async_trait;

use medcert_core::{ActivityLogEntry, Category, Certificate, Product};

/// Read operations the compliance core requires from the hosted store.
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks behind an `Arc`. The trait is object-safe to support
/// runtime store selection (memory vs. hosted).
///
/// Each fetch is independent and may be retried or abandoned without
/// corrupting anything — callers assemble results only after every fetch
/// they need has resolved.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All certificates, regardless of status. Status filtering is the
    /// caller's job.
    async fn fetch_certificates(&self) -> Result<Vec<Certificate>, StoreError>;

    /// All categories.
    async fn fetch_categories(&self) -> Result<Vec<Category>, StoreError>;

    /// All products.
    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError>;

    /// The `limit` most-recent activity-log entries, most-recent-first.
    async fn fetch_activity_log(&self, limit: usize)
        -> Result<Vec<ActivityLogEntry>, StoreError>;
}
