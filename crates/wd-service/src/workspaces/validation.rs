use super::{NewWorkspace, WorkspaceService};
use crate::chain::Decorator;
use crate::{Result, ServiceError};

use wd_core::{Pagination, Workspace};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;

const MAX_NAME_LEN: usize = 128;
const MAX_SHORT_NAME_LEN: usize = 32;
const MAX_DESCRIPTION_LEN: usize = 1024;

/// Rejects malformed input before it reaches any deeper layer.
pub struct Validation {
    next: Arc<dyn WorkspaceService>,
}

impl Validation {
    pub fn new(next: Arc<dyn WorkspaceService>) -> Self {
        Self { next }
    }

    pub fn decorator() -> Decorator<dyn WorkspaceService> {
        Box::new(|next| Arc::new(Self::new(next)) as Arc<dyn WorkspaceService>)
    }

    #[track_caller]
    fn check_tenant(tenant_id: u64) -> Result<()> {
        if tenant_id == 0 {
            return Err(ServiceError::InvalidParameters {
                message: "tenant id must be non-zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    #[track_caller]
    fn check_id(field: &'static str, id: u64) -> Result<()> {
        if id == 0 {
            return Err(ServiceError::InvalidParameters {
                message: format!("{field} must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    fn check_fields(name: &str, short_name: &str, description: &str) -> Result<()> {
        if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
            return Err(invalid("name", "must be 1 to 128 characters"));
        }
        if short_name.is_empty() || short_name.chars().count() > MAX_SHORT_NAME_LEN {
            return Err(invalid("short_name", "must be 1 to 32 characters"));
        }
        if !short_name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(invalid(
                "short_name",
                "must contain only lowercase letters, digits and dashes",
            ));
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(invalid("description", "exceeds maximum length"));
        }
        Ok(())
    }
}

#[track_caller]
fn invalid(field: &'static str, message: &str) -> ServiceError {
    ServiceError::Validation {
        field,
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl WorkspaceService for Validation {
    async fn create(
        &self,
        tenant_id: u64,
        user_id: u64,
        new_workspace: NewWorkspace,
    ) -> Result<Workspace> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("user id", user_id)?;
        Self::check_fields(
            &new_workspace.name,
            &new_workspace.short_name,
            &new_workspace.description,
        )?;
        self.next.create(tenant_id, user_id, new_workspace).await
    }

    async fn get(&self, tenant_id: u64, workspace_id: u64) -> Result<Workspace> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("workspace id", workspace_id)?;
        self.next.get(tenant_id, workspace_id).await
    }

    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<Workspace>> {
        Self::check_tenant(tenant_id)?;
        self.next.list(tenant_id, pagination).await
    }

    async fn update(&self, tenant_id: u64, workspace: Workspace) -> Result<Workspace> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("workspace id", workspace.id)?;
        Self::check_fields(
            &workspace.name,
            &workspace.short_name,
            &workspace.description,
        )?;
        self.next.update(tenant_id, workspace).await
    }

    async fn delete(&self, tenant_id: u64, workspace_id: u64) -> Result<()> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("workspace id", workspace_id)?;
        self.next.delete(tenant_id, workspace_id).await
    }
}
