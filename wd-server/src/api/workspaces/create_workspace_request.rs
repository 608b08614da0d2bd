use wd_service::workspaces::NewWorkspace;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateWorkspaceRequest {
    pub name: String,
    /// Unique short handle within the tenant, e.g., "eng"
    pub short_name: String,
    #[serde(default)]
    pub description: String,
}

impl From<CreateWorkspaceRequest> for NewWorkspace {
    fn from(r: CreateWorkspaceRequest) -> Self {
        Self {
            name: r.name,
            short_name: r.short_name,
            description: r.description,
        }
    }
}
