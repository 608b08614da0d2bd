//! Notification entity - a tenant-scoped message addressed to a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// 0 until assigned by storage
    pub id: u64,
    pub tenant_id: u64,
    /// Recipient; 0 means broadcast to the whole tenant
    pub user_id: u64,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

impl Notification {
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}
