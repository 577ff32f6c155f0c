//! Audit metadata
//!
//! Every persisted record carries who created it and when, and who last
//! modified it and when. Stamping happens in the persistence wrapper
//! (`adapters::Audited`), never in the service layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Created/updated timestamps and actors for a stored record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditInfo {
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl AuditInfo {
    /// Record the insert. Update fields stay empty until the first save.
    pub fn stamp_created(&mut self, actor: &str, at: DateTime<Utc>) {
        self.created_at = Some(at);
        self.created_by = Some(actor.to_string());
    }

    /// Record a modification. Creation fields are never touched.
    pub fn stamp_updated(&mut self, actor: &str, at: DateTime<Utc>) {
        self.updated_at = Some(at);
        self.updated_by = Some(actor.to_string());
    }
}
