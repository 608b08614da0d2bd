use super::workspace_dto::WorkspaceDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WorkspaceListResponse {
    pub workspaces: Vec<WorkspaceDto>,
}
