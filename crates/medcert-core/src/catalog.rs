//! # Catalog Entities
//!
//! The entities the marketing site and admin console read from the hosted
//! store: certificates, categories, segments, and products. This module
//! owns their row shapes and the one piece of normalization the rest of
//! the stack depends on — folding the legacy certificate-inheritance
//! column pair into [`CertificateSource`] at the serde boundary.
//!
//! ## Certificate Inheritance
//!
//! A product either inherits its displayed certificates from its
//! category's mappings (the default) or carries an explicit per-product
//! selection. The store encodes this as an optional `inherit_certificates`
//! boolean next to a `certificate_ids` array, where "not exactly false"
//! means inherit. That contract is resolved exactly once, on
//! deserialization: downstream code only ever sees the tagged union.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::{CategoryId, CertificateId, ProductId, SegmentId};

// ─── Certificates ────────────────────────────────────────────────────

/// Lifecycle status of a certificate.
///
/// Only `Active` certificates are ever surfaced to end customers;
/// `Draft` and `Disabled` certificates exist for operator workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateStatus {
    /// Certificate is published and may appear on products and reports.
    Active,
    /// Certificate is being prepared and is not yet published.
    Draft,
    /// Certificate has been withdrawn by an operator.
    Disabled,
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Draft => write!(f, "Draft"),
            Self::Disabled => write!(f, "Disabled"),
        }
    }
}

/// A compliance certificate held by the company (e.g. ISO 13485, CE Mark).
///
/// Certificates are referenced — never owned — by categories and products.
/// The `category_ids` set records which categories the certificate is
/// mapped to; products in inherit mode pick the mapping up transitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    /// Unique certificate identifier.
    pub id: CertificateId,
    /// Display name (e.g. "ISO 13485:2016").
    pub name: String,
    /// Issuing body (e.g. "TÜV SÜD").
    pub issuer: String,
    /// Expiry date, if the certificate expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    /// Storage reference of the certificate scan/badge image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Lifecycle status.
    pub status: CertificateStatus,
    /// Whether the certificate badge is rendered on product pages.
    #[serde(default)]
    pub show_on_products: bool,
    /// Whether the certificate badge is rendered on the homepage strip.
    #[serde(default)]
    pub show_on_homepage: bool,
    /// Categories this certificate is mapped to.
    #[serde(default)]
    pub category_ids: BTreeSet<CategoryId>,
}

impl Certificate {
    /// Whether the certificate may be surfaced to end customers.
    pub fn is_active(&self) -> bool {
        self.status == CertificateStatus::Active
    }

    /// Whether the certificate is mapped to the given category.
    pub fn applies_to(&self, category: &CategoryId) -> bool {
        self.category_ids.contains(category)
    }
}

// ─── Segments & categories ───────────────────────────────────────────

/// Top-level market grouping above categories (e.g. Healthcare,
/// Industrial Safety).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    /// Unique segment identifier.
    pub id: SegmentId,
    /// Display name.
    pub name: String,
    /// Position in navigation menus.
    #[serde(default)]
    pub display_order: u32,
}

/// A product classification within a segment — the unit certificates are
/// primarily mapped to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Parent segment.
    pub segment_id: SegmentId,
    /// Position in navigation menus.
    #[serde(default)]
    pub display_order: u32,
    /// Whether the category is shown on the site.
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

// ─── Products ────────────────────────────────────────────────────────

/// Where a product's displayed certificates come from.
///
/// Resolved once from the store's legacy flag pair when a product row is
/// deserialized; see the module docs. `Overridden` carries the explicit
/// per-product selection and marks the product as a compliance exception
/// in reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateSource {
    /// Certificates derive from the product's category mappings.
    Inherited,
    /// Certificates are the explicit set chosen for this product.
    Overridden(BTreeSet<CertificateId>),
}

impl CertificateSource {
    /// Whether this product deviates from its category's defaults.
    pub fn is_override(&self) -> bool {
        matches!(self, Self::Overridden(_))
    }

    /// The explicit certificate selection, if overridden.
    pub fn override_ids(&self) -> Option<&BTreeSet<CertificateId>> {
        match self {
            Self::Inherited => None,
            Self::Overridden(ids) => Some(ids),
        }
    }
}

/// Derived compliance-mode label for the per-product report matrix.
///
/// This label is computed from [`CertificateSource`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceMode {
    /// Certificates derive from the category mappings.
    Inherited,
    /// Certificates are an explicit per-product selection.
    ManualOverride,
}

impl std::fmt::Display for ComplianceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inherited => write!(f, "Inherited"),
            Self::ManualOverride => write!(f, "Manual Override"),
        }
    }
}

/// A catalog product.
///
/// Serialized in the store's row shape (`ProductWire`): the
/// `certificates` union is written back as the `inherit_certificates` /
/// `certificate_ids` pair, with the flag always explicit on the way out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ProductWire", into = "ProductWire")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Owning category.
    pub category_id: CategoryId,
    /// Owning segment.
    pub segment_id: SegmentId,
    /// Where the product's displayed certificates come from.
    pub certificates: CertificateSource,
}

impl Product {
    /// The derived compliance-mode label for this product.
    pub fn compliance_mode(&self) -> ComplianceMode {
        match self.certificates {
            CertificateSource::Inherited => ComplianceMode::Inherited,
            CertificateSource::Overridden(_) => ComplianceMode::ManualOverride,
        }
    }

    /// Whether the product is a compliance exception (override mode).
    pub fn is_exception(&self) -> bool {
        self.certificates.is_override()
    }
}

/// The product row as the hosted store shapes it.
///
/// `inherit_certificates` is optional on input — absent means inherit,
/// matching rows created before the override feature shipped. On output
/// the flag is always written explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductWire {
    id: ProductId,
    name: String,
    category_id: CategoryId,
    segment_id: SegmentId,
    #[serde(default)]
    inherit_certificates: Option<bool>,
    #[serde(default)]
    certificate_ids: Vec<CertificateId>,
}

impl From<ProductWire> for Product {
    fn from(wire: ProductWire) -> Self {
        // "Not exactly false" means inherit. In inherit mode any stray
        // certificate_ids content is discarded here, so it cannot be
        // consulted downstream.
        let certificates = if wire.inherit_certificates == Some(false) {
            CertificateSource::Overridden(wire.certificate_ids.into_iter().collect())
        } else {
            CertificateSource::Inherited
        };
        Self {
            id: wire.id,
            name: wire.name,
            category_id: wire.category_id,
            segment_id: wire.segment_id,
            certificates,
        }
    }
}

impl From<Product> for ProductWire {
    fn from(product: Product) -> Self {
        let (inherit, ids) = match product.certificates {
            CertificateSource::Inherited => (true, Vec::new()),
            CertificateSource::Overridden(ids) => (false, ids.into_iter().collect()),
        };
        Self {
            id: product.id,
            name: product.name,
            category_id: product.category_id,
            segment_id: product.segment_id,
            inherit_certificates: Some(inherit),
            certificate_ids: ids,
        }
    }
}
