use super::workspace_dto::WorkspaceDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WorkspaceResponse {
    pub workspace: WorkspaceDto,
}
