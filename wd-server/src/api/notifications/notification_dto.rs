use wd_core::Notification;

use serde::Serialize;

/// Notification DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct NotificationDto {
    pub id: u64,
    /// 0 for tenant-wide broadcasts
    pub user_id: u64,
    pub message: String,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<i64>,
}

impl From<Notification> for NotificationDto {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            user_id: n.user_id,
            message: n.message,
            created_at: n.created_at.timestamp(),
            read_at: n.read_at.map(|t| t.timestamp()),
        }
    }
}
