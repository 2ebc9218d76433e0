//! # Activity Log Records
//!
//! Row shape of the admin console's activity log. Entries are append-only
//! and written by the console's CRUD surfaces; this stack only ever reads
//! them back, most-recent-first, for the audit section of compliance
//! reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single append-only activity-log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// When the action happened.
    pub timestamp: DateTime<Utc>,
    /// The operator who performed the action.
    pub actor: String,
    /// Short action label (e.g. "certificate.update").
    pub action: String,
    /// Label of the record the action touched.
    pub target: String,
    /// Free-text detail line.
    #[serde(default)]
    pub details: String,
}
