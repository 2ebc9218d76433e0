//! # Compliance Report Route
//!
//! `GET /v1/reports` — the endpoint the print view calls with its
//! query-string configuration (see `medcert_report::config`). The
//! response carries the assembled report, the exception list, and the
//! echoed configuration, a superset sufficient for any combination of
//! section toggles; the renderer applies the toggles.

use axum::extract::{RawQuery, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use medcert_report::{
    detect_exceptions, ComplianceException, ComplianceReport, ReportAssembler, ReportConfig,
};

use crate::error::AppError;
use crate::state::AppState;

/// The report payload handed to the print renderer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportResponse {
    /// The configuration the report was generated under.
    #[schema(value_type = Object)]
    pub config: ReportConfig,
    /// The assembled report.
    #[schema(value_type = Object)]
    pub report: ComplianceReport,
    /// Compliance exceptions among the report's products.
    #[schema(value_type = Vec<Object>)]
    pub exceptions: Vec<ComplianceException>,
}

/// Build the reports router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/reports", get(generate_report))
}

/// GET /v1/reports?scope=…&target_id=…&sections=…&generated_by=…&timestamp=…
///
/// Unknown target ids degrade to placeholder names inside the report;
/// only a malformed configuration (bad scope, missing parameters) or a
/// store failure is an error.
#[utoipa::path(
    get,
    path = "/v1/reports",
    params(
        ("scope" = String, Query, description = "company | category | product | certificate"),
        ("target_id" = Option<String>, Query, description = "Target identifier; empty for company scope"),
        ("sections" = Option<String>, Query, description = "JSON-encoded map of section-name to bool"),
        ("generated_by" = String, Query, description = "Operator requesting the report"),
        ("timestamp" = String, Query, description = "RFC 3339 request timestamp"),
    ),
    responses(
        (status = 200, description = "Assembled compliance report", body = ReportResponse),
        (status = 422, description = "Malformed report configuration"),
        (status = 502, description = "Hosted store unavailable"),
    ),
    tag = "reports"
)]
pub(crate) async fn generate_report(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ReportResponse>, AppError> {
    let config = ReportConfig::from_query_string(query.as_deref().unwrap_or(""))
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let assembler = ReportAssembler::new(state.store.clone());
    let report = assembler
        .build_report(config.scope, &config.target_id)
        .await?;

    // Override resolution for the exceptions section needs the full
    // certificate collection, which narrower report scopes do not carry.
    let snapshot = state.snapshot().await?;
    let exceptions = detect_exceptions(&snapshot, &report.products);

    Ok(Json(ReportResponse {
        config,
        report,
        exceptions,
    }))
}
