//! # medcert-report — Compliance Report Assembler
//!
//! Turns one operator request ("audit this product", "audit this
//! category", "audit the whole company") into the structured payload the
//! print-formatted report renderer consumes. Assembly is single-shot:
//! fetch the catalog and the recent activity log, resolve certificates
//! through `medcert-resolve`, and emit a [`ComplianceReport`]. Nothing is
//! persisted — a report exists only for the duration of rendering.
//!
//! ## Sections Are Presentation Concerns
//!
//! The report configuration carries section toggles (company info,
//! certificate summary, compliance matrix, exceptions, audit log), but
//! the assembler does not filter by them. Its contract is to provide a
//! superset of data sufficient for any toggle combination; inclusion and
//! exclusion happen in the renderer.
//!
//! ## Failure Posture
//!
//! A report always renders something. Unknown target ids degrade to
//! placeholder names and empty collections; only store-access failures
//! propagate as errors.

pub mod assembler;
pub mod config;
pub mod report;
pub mod scope;

pub use assembler::{ReportAssembler, ACTIVITY_LOG_LIMIT, COMPANY_NAME};
pub use config::{ConfigParseError, ReportConfig, ReportSections};
pub use report::{detect_exceptions, ComplianceException, ComplianceReport};
pub use scope::{ReportScope, ScopeParseError};
