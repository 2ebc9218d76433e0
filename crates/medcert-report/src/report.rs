//! # Report Payload & Exception Detection
//!
//! The derived, non-persisted report structure and the exception scan
//! over its product list. An "exception" is a product in override mode —
//! one whose displayed certificates deviate from its category's defaults
//! — paired with the certificates the override actually resolves to.

use serde::{Deserialize, Serialize};

use medcert_core::{ActivityLogEntry, Certificate, Product};
use medcert_resolve::CatalogSnapshot;

use crate::scope::ReportScope;

/// A fully assembled compliance report.
///
/// Created on demand and handed to the renderer; it has no lifecycle of
/// its own. The collections are supersets — section toggles narrow what
/// is shown, never what is gathered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// What the report is scoped to.
    pub scope: ReportScope,
    /// Resolved display name of the target (or a placeholder).
    pub target_name: String,
    /// Certificates relevant to the scope.
    pub certificates: Vec<Certificate>,
    /// Products relevant to the scope.
    pub products: Vec<Product>,
    /// Recent activity-log excerpt, most-recent-first.
    pub logs: Vec<ActivityLogEntry>,
}

/// One compliance exception: an override-mode product with its resolved
/// certificate selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceException {
    /// The product deviating from category defaults.
    pub product: Product,
    /// The certificates its override resolves to (active subset).
    pub certificates: Vec<Certificate>,
}

/// Scan a report's product list for compliance exceptions.
///
/// Returns exactly the override-mode products among `products`, in
/// order, each paired with its effective certificates resolved against
/// `snapshot`.
pub fn detect_exceptions(
    snapshot: &CatalogSnapshot,
    products: &[Product],
) -> Vec<ComplianceException> {
    products
        .iter()
        .filter(|p| p.is_exception())
        .map(|p| ComplianceException {
            product: p.clone(),
            certificates: snapshot.effective_certificates(Some(p)),
        })
        .collect()
}
