use super::{NewWorkspace, WorkspaceService};
use crate::Result;
use crate::chain::Decorator;

use wd_cache::{BoundedCache, CacheKey, KeyBuilder};
use wd_core::{Pagination, Workspace};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

const WORKSPACE_TTL: Duration = Duration::from_secs(60);

/// Serves repeat lookups from the bounded cache.
pub struct Caching {
    next: Arc<dyn WorkspaceService>,
    cache: BoundedCache,
}

impl Caching {
    pub fn new(next: Arc<dyn WorkspaceService>, cache: BoundedCache) -> Self {
        Self { next, cache }
    }

    pub fn decorator(cache: BoundedCache) -> Decorator<dyn WorkspaceService> {
        Box::new(move |next| Arc::new(Self::new(next, cache)) as Arc<dyn WorkspaceService>)
    }

    fn id_key(tenant_id: u64, workspace_id: u64) -> CacheKey {
        KeyBuilder::new("workspace.by_id")
            .with_u64(tenant_id)
            .with_u64(workspace_id)
            .build()
    }
}

#[async_trait]
impl WorkspaceService for Caching {
    async fn create(
        &self,
        tenant_id: u64,
        user_id: u64,
        new_workspace: NewWorkspace,
    ) -> Result<Workspace> {
        self.next.create(tenant_id, user_id, new_workspace).await
    }

    async fn get(&self, tenant_id: u64, workspace_id: u64) -> Result<Workspace> {
        let entry = self.cache.entry(Self::id_key(tenant_id, workspace_id));
        if let Some(workspace) = entry.get::<Workspace>() {
            return Ok(workspace);
        }
        let workspace = self.next.get(tenant_id, workspace_id).await?;
        entry.set(WORKSPACE_TTL, &workspace);
        Ok(workspace)
    }

    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<Workspace>> {
        self.next.list(tenant_id, pagination).await
    }

    async fn update(&self, tenant_id: u64, workspace: Workspace) -> Result<Workspace> {
        let workspace = self.next.update(tenant_id, workspace).await?;
        self.cache
            .invalidate(&Self::id_key(tenant_id, workspace.id));
        Ok(workspace)
    }

    async fn delete(&self, tenant_id: u64, workspace_id: u64) -> Result<()> {
        self.next.delete(tenant_id, workspace_id).await?;
        self.cache
            .invalidate(&Self::id_key(tenant_id, workspace_id));
        Ok(())
    }
}
