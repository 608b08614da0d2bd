use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateWorkspaceRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Status name (`active`, `inactive`, `deleted`)
    pub status: String,
}
