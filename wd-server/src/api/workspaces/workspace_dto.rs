use wd_core::Workspace;

use serde::Serialize;

/// Workspace DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct WorkspaceDto {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Workspace> for WorkspaceDto {
    fn from(w: Workspace) -> Self {
        Self {
            id: w.id,
            user_id: w.user_id,
            name: w.name,
            short_name: w.short_name,
            description: w.description,
            status: w.status.to_string(),
            created_at: w.created_at.timestamp(),
            updated_at: w.updated_at.timestamp(),
        }
    }
}
