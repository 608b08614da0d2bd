//! Workspace entity - a tenant-scoped container for project work.

use crate::WorkspaceStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// 0 until assigned by storage
    pub id: u64,
    pub tenant_id: u64,
    /// User that created the workspace
    pub user_id: u64,
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub status: WorkspaceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Workspace {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
