//! # medcert-api — Axum API Surface
//!
//! The HTTP surface the site frontend, the admin console, and the print
//! renderer call. Route handlers carry no business logic — resolution
//! lives in `medcert-resolve`, assembly in `medcert-report`; handlers
//! fetch, delegate, and map errors to structured responses.
//!
//! ## API Surface
//!
//! | Route                                        | Module                    |
//! |----------------------------------------------|---------------------------|
//! | `GET /v1/categories/{id}/certificates`       | [`routes::certificates`]  |
//! | `GET /v1/products/{id}/certificates`         | [`routes::certificates`]  |
//! | `GET /v1/certificates/{id}/usage`            | [`routes::certificates`]  |
//! | `GET /v1/reports`                            | [`routes::reports`]       |
//! | `GET /openapi.json`                          | [`openapi`]               |
//! | `GET /health`                                | unauthenticated probe     |
//!
//! ## Crate Policy
//!
//! - Sits at the top of the dependency DAG.
//! - All errors map to structured HTTP responses via [`AppError`].

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

/// Assemble the full application router.
///
/// The health probe stays outside any future auth middleware so
/// orchestration can reach it without credentials.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::certificates::router())
        .merge(routes::reports::router())
        .merge(openapi::router())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
