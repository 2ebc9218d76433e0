//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`. The spec is the integration contract for
//! the site frontend and the print renderer.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the medcert API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "medcert API — Certificate Compliance Core",
        version = "0.3.2",
        description = "Certificate resolution and compliance reporting for the Novamed site and admin console.\n\nProvides:\n- **Certificate resolution** — a category's active certificates, a product's effective certificates after inheritance/override rules, and advisory usage checks before certificate deletion\n- **Compliance reports** — audit-document payloads scoped to the company, a category, a product, or a certificate, with exception detection for override-mode products",
        license(name = "BUSL-1.1"),
        contact(name = "Novamed", url = "https://novamed.example")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        crate::routes::certificates::category_certificates,
        crate::routes::certificates::product_certificates,
        crate::routes::certificates::certificate_usage,
        crate::routes::reports::generate_report,
    ),
    components(schemas(
        crate::routes::certificates::CategoryCertificatesResponse,
        crate::routes::certificates::ProductCertificatesResponse,
        crate::routes::certificates::CertificateUsageResponse,
        crate::routes::reports::ReportResponse,
    )),
    tags(
        (name = "certificates", description = "Certificate resolution"),
        (name = "reports", description = "Compliance report assembly"),
    )
)]
pub struct ApiDoc;

/// Serve the assembled spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_includes_all_routes() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&String> = spec.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.contains("/v1/reports")));
        assert!(paths
            .iter()
            .any(|p| p.contains("/v1/products/{product_id}/certificates")));
        assert!(paths
            .iter()
            .any(|p| p.contains("/v1/categories/{category_id}/certificates")));
        assert!(paths
            .iter()
            .any(|p| p.contains("/v1/certificates/{certificate_id}/usage")));
    }
}
