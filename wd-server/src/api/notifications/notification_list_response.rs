use super::notification_dto::NotificationDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationDto>,
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub notification: NotificationDto,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread: u64,
}
