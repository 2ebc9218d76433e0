//! # Report Scope
//!
//! The four scopes the report configuration screen offers. Scope strings
//! arrive from the query string; parsing is case-insensitive and an
//! unrecognized value is an explicit error at this boundary, which makes
//! the assembler total over the enum — there is no "unknown scope falls
//! through to defaults" path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a compliance report is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportScope {
    /// The whole organization.
    Company,
    /// One product category.
    Category,
    /// One product.
    Product,
    /// One certificate (usage audit).
    Certificate,
}

impl ReportScope {
    /// Canonical lowercase string, as carried in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Category => "category",
            Self::Product => "product",
            Self::Certificate => "certificate",
        }
    }
}

impl std::fmt::Display for ReportScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a scope string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized report scope: {value:?}")]
pub struct ScopeParseError {
    /// The rejected input.
    pub value: String,
}

impl std::str::FromStr for ReportScope {
    type Err = ScopeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "company" => Ok(Self::Company),
            "category" => Ok(Self::Category),
            "product" => Ok(Self::Product),
            "certificate" => Ok(Self::Certificate),
            _ => Err(ScopeParseError {
                value: s.to_string(),
            }),
        }
    }
}
