//! # Report Configuration & Query-String Codec
//!
//! The print view is opened in its own window and receives its
//! configuration through the URL: `scope`, `target_id` (empty for
//! company scope), `sections` (a JSON-encoded map of section-name →
//! bool), `generated_by`, and `timestamp` (RFC 3339). This module owns
//! that wire format in both directions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::form_urlencoded;

use crate::scope::{ReportScope, ScopeParseError};

/// Section toggles for the rendered report.
///
/// Toggles select what the renderer shows; the assembler ignores them
/// and always gathers the full superset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSections {
    /// Company letterhead and contact block.
    pub company_info: bool,
    /// Certificate summary table.
    pub certificate_summary: bool,
    /// Per-product compliance-details matrix.
    pub compliance_matrix: bool,
    /// Compliance exceptions (override-mode products).
    pub exceptions: bool,
    /// Recent activity-log excerpt.
    pub audit_log: bool,
}

impl Default for ReportSections {
    fn default() -> Self {
        Self {
            company_info: true,
            certificate_summary: true,
            compliance_matrix: true,
            exceptions: true,
            audit_log: true,
        }
    }
}

/// A complete report invocation as carried in the print view's URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// What the report is scoped to.
    pub scope: ReportScope,
    /// Target identifier; empty for company scope.
    #[serde(default)]
    pub target_id: String,
    /// Section toggles.
    #[serde(default)]
    pub sections: ReportSections,
    /// Operator who requested the report.
    pub generated_by: String,
    /// When the report was requested.
    pub timestamp: DateTime<Utc>,
}

/// Errors decoding a report configuration from a query string.
#[derive(Debug, Error)]
pub enum ConfigParseError {
    /// A required parameter is absent.
    #[error("missing query parameter: {name}")]
    MissingParam {
        /// The absent parameter.
        name: &'static str,
    },

    /// The scope value is not one of the four scopes.
    #[error(transparent)]
    InvalidScope(#[from] ScopeParseError),

    /// The sections map is not valid JSON.
    #[error("invalid sections map: {0}")]
    InvalidSections(#[from] serde_json::Error),

    /// The timestamp is not RFC 3339.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
}

impl ReportConfig {
    /// Encode as the print view's query string (no leading `?`).
    ///
    /// The sections map is JSON-encoded into a single parameter, matching
    /// what the configuration screen has always produced.
    pub fn to_query_string(&self) -> String {
        // ReportSections serialization is infallible: a struct of five
        // bools cannot fail to encode.
        let sections =
            serde_json::to_string(&self.sections).unwrap_or_else(|_| "{}".to_string());

        form_urlencoded::Serializer::new(String::new())
            .append_pair("scope", self.scope.as_str())
            .append_pair("target_id", &self.target_id)
            .append_pair("sections", &sections)
            .append_pair("generated_by", &self.generated_by)
            .append_pair("timestamp", &self.timestamp.to_rfc3339())
            .finish()
    }

    /// Decode from a query string (with or without a leading `?`).
    ///
    /// `target_id` and `sections` are optional — an absent `target_id` is
    /// empty (company scope) and absent `sections` means everything on.
    pub fn from_query_string(query: &str) -> Result<Self, ConfigParseError> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut scope = None;
        let mut target_id = String::new();
        let mut sections = ReportSections::default();
        let mut generated_by = None;
        let mut timestamp = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "scope" => scope = Some(value.parse::<ReportScope>()?),
                "target_id" => target_id = value.into_owned(),
                "sections" => sections = serde_json::from_str(&value)?,
                "generated_by" => generated_by = Some(value.into_owned()),
                "timestamp" => {
                    timestamp = Some(DateTime::parse_from_rfc3339(&value)?.with_timezone(&Utc))
                }
                _ => {}
            }
        }

        Ok(Self {
            scope: scope.ok_or(ConfigParseError::MissingParam { name: "scope" })?,
            target_id,
            sections,
            generated_by: generated_by
                .ok_or(ConfigParseError::MissingParam { name: "generated_by" })?,
            timestamp: timestamp
                .ok_or(ConfigParseError::MissingParam { name: "timestamp" })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_config() -> ReportConfig {
        ReportConfig {
            scope: ReportScope::Category,
            target_id: "cat_gloves".to_string(),
            sections: ReportSections {
                audit_log: false,
                ..ReportSections::default()
            },
            generated_by: "qa@novamed.example".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn query_string_roundtrip() {
        let config = sample_config();
        let encoded = config.to_query_string();
        let decoded = ReportConfig::from_query_string(&encoded).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn leading_question_mark_is_accepted() {
        let config = sample_config();
        let encoded = format!("?{}", config.to_query_string());
        let decoded = ReportConfig::from_query_string(&encoded).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn company_scope_with_empty_target() {
        let decoded = ReportConfig::from_query_string(
            "scope=company&target_id=&sections=%7B%7D&generated_by=ops&timestamp=2026-03-14T09%3A30%3A00%2B00%3A00",
        )
        .unwrap();
        assert_eq!(decoded.scope, ReportScope::Company);
        assert!(decoded.target_id.is_empty());
    }

    #[test]
    fn absent_sections_default_to_all_on() {
        let decoded = ReportConfig::from_query_string(
            "scope=company&generated_by=ops&timestamp=2026-03-14T09%3A30%3A00Z",
        )
        .unwrap();
        assert_eq!(decoded.sections, ReportSections::default());
    }

    #[test]
    fn sections_map_uses_section_names() {
        let decoded = ReportConfig::from_query_string(
            "scope=company&sections=%7B%22exceptions%22%3Afalse%7D&generated_by=ops&timestamp=2026-03-14T09%3A30%3A00Z",
        )
        .unwrap();
        assert!(!decoded.sections.exceptions);
        // Unlisted sections keep their defaults.
        assert!(decoded.sections.company_info);
    }

    #[test]
    fn missing_scope_is_an_error() {
        let err = ReportConfig::from_query_string("generated_by=ops&timestamp=2026-03-14T09:30:00Z")
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigParseError::MissingParam { name: "scope" }
        ));
    }

    #[test]
    fn unknown_scope_is_an_error() {
        let err = ReportConfig::from_query_string(
            "scope=warehouse&generated_by=ops&timestamp=2026-03-14T09:30:00Z",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigParseError::InvalidScope(_)));
    }
}
