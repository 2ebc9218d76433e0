//! # Catalog Snapshot
//!
//! An immutable view of the three catalog collections the resolution
//! engine reads. Assembled from one round of store fetches; resolution
//! never goes back to the store mid-computation, so two calls over the
//! same snapshot always agree.

use serde::{Deserialize, Serialize};

use medcert_core::{Category, CategoryId, Certificate, CertificateId, Product, ProductId};

/// Immutable catalog state for one round of resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// All certificates, any status.
    pub certificates: Vec<Certificate>,
    /// All categories.
    pub categories: Vec<Category>,
    /// All products.
    pub products: Vec<Product>,
}

impl CatalogSnapshot {
    /// Assemble a snapshot from fetched collections.
    pub fn new(
        certificates: Vec<Certificate>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            certificates,
            categories,
            products,
        }
    }

    /// Look up a certificate by id.
    pub fn certificate(&self, id: &CertificateId) -> Option<&Certificate> {
        self.certificates.iter().find(|c| &c.id == id)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}
