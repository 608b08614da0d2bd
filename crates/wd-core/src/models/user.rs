//! User entity - an identity belonging to exactly one tenant.

use crate::UserStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account. Passwords are stored hashed by the storage layer and are
/// never serialized back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 0 until assigned by storage
    pub id: u64,
    pub tenant_id: u64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    /// Never serialized; decodes to empty when absent
    #[serde(skip_serializing, default)]
    pub password: String,
    pub status: UserStatus,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
