//! Creation/update audit metadata and soft deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit metadata: who created/last updated an entity, and when (UTC).
///
/// Creation fields are stamped at construction and may be overwritten once
/// infrastructure knows the acting user; update fields stay unset until the
/// first [`AuditInfo::set_updated`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    created_at_utc: DateTime<Utc>,
    created_by: Option<String>,
    updated_at_utc: Option<DateTime<Utc>>,
    updated_by: Option<String>,
}

impl AuditInfo {
    pub fn new() -> Self {
        Self {
            created_at_utc: Utc::now(),
            created_by: None,
            updated_at_utc: None,
            updated_by: None,
        }
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        self.created_at_utc
    }

    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at_utc
    }

    pub fn updated_by(&self) -> Option<&str> {
        self.updated_by.as_deref()
    }

    /// Overwrite the creation stamp. `None` for the timestamp means "now".
    pub fn set_created(
        &mut self,
        created_by: Option<String>,
        created_at_utc: Option<DateTime<Utc>>,
    ) {
        self.created_by = created_by;
        self.created_at_utc = created_at_utc.unwrap_or_else(Utc::now);
    }

    /// Record an update stamp. `None` for the timestamp means "now".
    pub fn set_updated(
        &mut self,
        updated_by: Option<String>,
        updated_at_utc: Option<DateTime<Utc>>,
    ) {
        self.updated_by = updated_by;
        self.updated_at_utc = Some(updated_at_utc.unwrap_or_else(Utc::now));
    }
}

impl Default for AuditInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Entities that carry audit metadata.
pub trait Auditable {
    fn audit(&self) -> &AuditInfo;
    fn audit_mut(&mut self) -> &mut AuditInfo;

    fn set_created_audit(
        &mut self,
        created_by: Option<String>,
        created_at_utc: Option<DateTime<Utc>>,
    ) {
        self.audit_mut().set_created(created_by, created_at_utc);
    }

    fn set_updated_audit(
        &mut self,
        updated_by: Option<String>,
        updated_at_utc: Option<DateTime<Utc>>,
    ) {
        self.audit_mut().set_updated(updated_by, updated_at_utc);
    }
}

/// Soft-deletion state: flagged deleted without physical removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftDeleteState {
    is_deleted: bool,
    deleted_at_utc: Option<DateTime<Utc>>,
    deleted_by: Option<String>,
}

impl SoftDeleteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub fn deleted_at_utc(&self) -> Option<DateTime<Utc>> {
        self.deleted_at_utc
    }

    pub fn deleted_by(&self) -> Option<&str> {
        self.deleted_by.as_deref()
    }

    /// Mark deleted. `None` for the timestamp means "now".
    pub fn delete(&mut self, deleted_by: Option<String>, deleted_at_utc: Option<DateTime<Utc>>) {
        self.is_deleted = true;
        self.deleted_by = deleted_by;
        self.deleted_at_utc = Some(deleted_at_utc.unwrap_or_else(Utc::now));
    }

    /// Undo a soft deletion, clearing all deletion fields.
    pub fn restore(&mut self) {
        self.is_deleted = false;
        self.deleted_at_utc = None;
        self.deleted_by = None;
    }
}

/// Entities that support soft deletion.
pub trait SoftDeletable {
    fn soft_delete(&self) -> &SoftDeleteState;
    fn soft_delete_mut(&mut self) -> &mut SoftDeleteState;

    fn is_deleted(&self) -> bool {
        self.soft_delete().is_deleted()
    }

    fn delete(&mut self, deleted_by: Option<String>, deleted_at_utc: Option<DateTime<Utc>>) {
        self.soft_delete_mut().delete(deleted_by, deleted_at_utc);
    }

    fn restore(&mut self) {
        self.soft_delete_mut().restore();
    }
}
