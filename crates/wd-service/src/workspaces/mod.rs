//! Workspace service: named containers owned by a user within a tenant.

mod caching;
mod logging;
mod validation;

pub use caching::Caching;
pub use logging::Logging;
pub use validation::Validation;

use crate::chain::compose;
use crate::{Result, ServiceError};

use wd_cache::BoundedCache;
use wd_core::{Pagination, Workspace, WorkspaceStatus};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Fields accepted when creating a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkspace {
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub description: String,
}

#[async_trait]
pub trait WorkspaceService: Send + Sync {
    async fn create(
        &self,
        tenant_id: u64,
        user_id: u64,
        new_workspace: NewWorkspace,
    ) -> Result<Workspace>;
    async fn get(&self, tenant_id: u64, workspace_id: u64) -> Result<Workspace>;
    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<Workspace>>;
    async fn update(&self, tenant_id: u64, workspace: Workspace) -> Result<Workspace>;
    async fn delete(&self, tenant_id: u64, workspace_id: u64) -> Result<()>;
}

/// Persistence surface the workspace service is written against.
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    async fn create(&self, workspace: &Workspace) -> Result<u64>;
    async fn find_by_id(&self, tenant_id: u64, workspace_id: u64) -> Result<Option<Workspace>>;
    async fn find_by_short_name(
        &self,
        tenant_id: u64,
        short_name: &str,
    ) -> Result<Option<Workspace>>;
    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<Workspace>>;
    async fn update(&self, workspace: &Workspace) -> Result<()>;
    async fn soft_delete(&self, tenant_id: u64, workspace_id: u64) -> Result<()>;
}

/// Base implementation; decorators wrap this.
pub struct WorkspaceManager {
    store: Arc<dyn WorkspaceStore>,
}

impl WorkspaceManager {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WorkspaceService for WorkspaceManager {
    async fn create(
        &self,
        tenant_id: u64,
        user_id: u64,
        new_workspace: NewWorkspace,
    ) -> Result<Workspace> {
        if self
            .store
            .find_by_short_name(tenant_id, &new_workspace.short_name)
            .await?
            .is_some()
        {
            return Err(ServiceError::AlreadyExists {
                entity: "workspace",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = Utc::now();
        let mut workspace = Workspace {
            id: 0,
            tenant_id,
            user_id,
            name: new_workspace.name,
            short_name: new_workspace.short_name,
            description: new_workspace.description,
            status: WorkspaceStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        workspace.id = self.store.create(&workspace).await?;
        Ok(workspace)
    }

    async fn get(&self, tenant_id: u64, workspace_id: u64) -> Result<Workspace> {
        self.store
            .find_by_id(tenant_id, workspace_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                entity: "workspace",
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<Workspace>> {
        self.store.list(tenant_id, pagination).await
    }

    async fn update(&self, tenant_id: u64, mut workspace: Workspace) -> Result<Workspace> {
        workspace.tenant_id = tenant_id;
        workspace.updated_at = Utc::now();
        self.store.update(&workspace).await?;
        Ok(workspace)
    }

    async fn delete(&self, tenant_id: u64, workspace_id: u64) -> Result<()> {
        self.store.soft_delete(tenant_id, workspace_id).await
    }
}

/// Assemble the full workspace chain: validation outermost, then caching,
/// then logging, then the manager.
pub fn build(store: Arc<dyn WorkspaceStore>, cache: BoundedCache) -> Arc<dyn WorkspaceService> {
    let base: Arc<dyn WorkspaceService> = Arc::new(WorkspaceManager::new(store));
    compose(
        base,
        vec![
            Logging::decorator(),
            Caching::decorator(cache),
            Validation::decorator(),
        ],
    )
}
