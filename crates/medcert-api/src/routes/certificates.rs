//! # Certificate Resolution Routes
//!
//! The read endpoints the product pages and the admin console call:
//!
//! - `GET /v1/categories/{category_id}/certificates` — a category's
//!   active certificate badges.
//! - `GET /v1/products/{product_id}/certificates` — a product's
//!   effective badges plus its derived compliance-mode label.
//! - `GET /v1/certificates/{certificate_id}/usage` — advisory usage
//!   check shown before an operator deletes a certificate.
//!
//! Resolution itself never errors on dangling references; only the
//! product endpoint returns 404, because its response cannot name a
//! compliance mode for a product that does not exist.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use medcert_core::{CategoryId, Certificate, CertificateId, ComplianceMode, ProductId};

use crate::error::AppError;
use crate::state::AppState;

/// Active certificates mapped to a category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCertificatesResponse {
    /// The category that was queried.
    pub category_id: String,
    /// Active certificates mapped to it (empty when unknown).
    #[schema(value_type = Vec<Object>)]
    pub certificates: Vec<Certificate>,
}

/// A product's effective certificates and compliance mode.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductCertificatesResponse {
    /// The product that was queried.
    pub product_id: String,
    /// Display name of the product.
    pub product_name: String,
    /// Derived compliance-mode label ("Inherited" / "Manual Override").
    pub compliance_mode: String,
    /// The product's effective certificates.
    #[schema(value_type = Vec<Object>)]
    pub certificates: Vec<Certificate>,
}

/// Advisory usage report for a certificate.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CertificateUsageResponse {
    /// The certificate that was queried.
    pub certificate_id: String,
    /// Whether anything still references it.
    pub in_use: bool,
    /// Names of categories mapped to it.
    pub categories: Vec<String>,
    /// Names of products explicitly overriding to it.
    pub products: Vec<String>,
}

/// Build the certificate resolution router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/categories/:category_id/certificates",
            get(category_certificates),
        )
        .route(
            "/v1/products/:product_id/certificates",
            get(product_certificates),
        )
        .route(
            "/v1/certificates/:certificate_id/usage",
            get(certificate_usage),
        )
}

/// GET /v1/categories/{category_id}/certificates
///
/// Unknown categories resolve to an empty list, not an error — the
/// category page renders "no certificates" rather than failing.
#[utoipa::path(
    get,
    path = "/v1/categories/{category_id}/certificates",
    params(("category_id" = String, Path, description = "Category to resolve")),
    responses(
        (status = 200, description = "Active certificates for the category", body = CategoryCertificatesResponse),
    ),
    tag = "certificates"
)]
pub(crate) async fn category_certificates(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryCertificatesResponse>, AppError> {
    let snapshot = state.snapshot().await?;

    let certificates = match CategoryId::new(category_id.as_str()) {
        Ok(id) => snapshot.certificates_for_category(&id),
        Err(_) => Vec::new(),
    };

    Ok(Json(CategoryCertificatesResponse {
        category_id,
        certificates,
    }))
}

/// GET /v1/products/{product_id}/certificates
#[utoipa::path(
    get,
    path = "/v1/products/{product_id}/certificates",
    params(("product_id" = String, Path, description = "Product to resolve")),
    responses(
        (status = 200, description = "Effective certificates for the product", body = ProductCertificatesResponse),
        (status = 404, description = "Product not found"),
    ),
    tag = "certificates"
)]
pub(crate) async fn product_certificates(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductCertificatesResponse>, AppError> {
    let snapshot = state.snapshot().await?;

    let product = ProductId::new(product_id.as_str())
        .ok()
        .and_then(|id| snapshot.product(&id).cloned())
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let certificates = snapshot.effective_certificates(Some(&product));
    let mode: ComplianceMode = product.compliance_mode();

    Ok(Json(ProductCertificatesResponse {
        product_id,
        product_name: product.name,
        compliance_mode: mode.to_string(),
        certificates,
    }))
}

/// GET /v1/certificates/{certificate_id}/usage
///
/// Advisory only — the console warns the operator, it does not block
/// deletion here.
#[utoipa::path(
    get,
    path = "/v1/certificates/{certificate_id}/usage",
    params(("certificate_id" = String, Path, description = "Certificate to check")),
    responses(
        (status = 200, description = "Usage summary for the certificate", body = CertificateUsageResponse),
    ),
    tag = "certificates"
)]
pub(crate) async fn certificate_usage(
    State(state): State<AppState>,
    Path(certificate_id): Path<String>,
) -> Result<Json<CertificateUsageResponse>, AppError> {
    let snapshot = state.snapshot().await?;

    let usage = match CertificateId::new(certificate_id.as_str()) {
        Ok(id) => snapshot.usage_of(&id),
        Err(_) => medcert_resolve::CertificateUsage {
            in_use: false,
            categories: Vec::new(),
            products: Vec::new(),
        },
    };

    Ok(Json(CertificateUsageResponse {
        certificate_id,
        in_use: usage.in_use,
        categories: usage.categories,
        products: usage.products,
    }))
}
