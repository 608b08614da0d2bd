use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    /// Status name (`active`, `disabled`, `deleted`)
    pub status: String,
    pub roles: Vec<String>,
}
