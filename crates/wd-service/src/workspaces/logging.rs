use super::{NewWorkspace, WorkspaceService};
use crate::chain::Decorator;
use crate::{Result, ServiceError};

use wd_core::{Pagination, Workspace};

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

/// Logs every call with its outcome and latency, and wraps failures with
/// the operation name.
pub struct Logging {
    next: Arc<dyn WorkspaceService>,
}

impl Logging {
    pub fn new(next: Arc<dyn WorkspaceService>) -> Self {
        Self { next }
    }

    pub fn decorator() -> Decorator<dyn WorkspaceService> {
        Box::new(|next| Arc::new(Self::new(next)) as Arc<dyn WorkspaceService>)
    }

    fn finish<T>(
        op: &'static str,
        tenant_id: u64,
        started: Instant,
        result: Result<T>,
    ) -> Result<T> {
        let elapsed_ms = started.elapsed().as_millis();
        match result {
            Ok(value) => {
                log::info!(
                    "{op} [unit=workspace_service status=success tenant_id={tenant_id} elapsed_ms={elapsed_ms}]"
                );
                Ok(value)
            }
            Err(e) => {
                log::error!(
                    "unable to {op} [unit=workspace_service tenant_id={tenant_id} elapsed_ms={elapsed_ms} cause={e}]"
                );
                Err(ServiceError::context(format!("unable to {op}"), e))
            }
        }
    }
}

#[async_trait]
impl WorkspaceService for Logging {
    async fn create(
        &self,
        tenant_id: u64,
        user_id: u64,
        new_workspace: NewWorkspace,
    ) -> Result<Workspace> {
        let started = Instant::now();
        let result = self.next.create(tenant_id, user_id, new_workspace).await;
        Self::finish("create workspace", tenant_id, started, result)
    }

    async fn get(&self, tenant_id: u64, workspace_id: u64) -> Result<Workspace> {
        let started = Instant::now();
        let result = self.next.get(tenant_id, workspace_id).await;
        Self::finish("get workspace", tenant_id, started, result)
    }

    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<Workspace>> {
        let started = Instant::now();
        let result = self.next.list(tenant_id, pagination).await;
        Self::finish("list workspaces", tenant_id, started, result)
    }

    async fn update(&self, tenant_id: u64, workspace: Workspace) -> Result<Workspace> {
        let started = Instant::now();
        let result = self.next.update(tenant_id, workspace).await;
        Self::finish("update workspace", tenant_id, started, result)
    }

    async fn delete(&self, tenant_id: u64, workspace_id: u64) -> Result<()> {
        let started = Instant::now();
        let result = self.next.delete(tenant_id, workspace_id).await;
        Self::finish("delete workspace", tenant_id, started, result)
    }
}
