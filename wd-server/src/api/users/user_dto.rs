use wd_core::User;

use serde::Serialize;

/// User DTO for JSON serialization. Password material never appears here.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub status: String,
    pub roles: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            username: u.username,
            status: u.status.to_string(),
            roles: u.roles,
            created_at: u.created_at.timestamp(),
            updated_at: u.updated_at.timestamp(),
        }
    }
}
