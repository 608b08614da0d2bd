use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NotifyRequest {
    /// Recipient user id
    pub user_id: u64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct BroadcastRequest {
    pub message: String,
}
