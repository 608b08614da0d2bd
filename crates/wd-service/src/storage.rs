//! SQL-backed store implementations over the repository layer.
//!
//! Repository errors carry their own category, so the adapters only lift
//! them into the service error type.

use crate::Result;
use crate::notifications::NotificationStore;
use crate::users::UserStore;
use crate::workspaces::WorkspaceStore;

use wd_core::{Notification, Pagination, User, Workspace};
use wd_db::{NotificationRepository, UserRepository, WorkspaceRepository};

use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqlUserStore {
    repo: UserRepository,
}

impl SqlUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: UserRepository::new(pool),
        }
    }
}

#[async_trait]
impl UserStore for SqlUserStore {
    async fn create(&self, user: &User) -> Result<u64> {
        Ok(self.repo.create(user).await?)
    }

    async fn find_by_id(&self, tenant_id: u64, user_id: u64) -> Result<Option<User>> {
        Ok(self.repo.find_by_id(tenant_id, user_id).await?)
    }

    async fn find_by_username(&self, tenant_id: u64, username: &str) -> Result<Option<User>> {
        Ok(self.repo.find_by_username(tenant_id, username).await?)
    }

    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<User>> {
        Ok(self.repo.list(tenant_id, pagination).await?)
    }

    async fn update(&self, user: &User) -> Result<()> {
        Ok(self.repo.update(user).await?)
    }

    async fn update_password(
        &self,
        tenant_id: u64,
        user_id: u64,
        password_hash: &str,
    ) -> Result<()> {
        Ok(self
            .repo
            .update_password(tenant_id, user_id, password_hash)
            .await?)
    }

    async fn soft_delete(&self, tenant_id: u64, user_id: u64) -> Result<()> {
        Ok(self.repo.soft_delete(tenant_id, user_id).await?)
    }
}

pub struct SqlWorkspaceStore {
    repo: WorkspaceRepository,
}

impl SqlWorkspaceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: WorkspaceRepository::new(pool),
        }
    }
}

#[async_trait]
impl WorkspaceStore for SqlWorkspaceStore {
    async fn create(&self, workspace: &Workspace) -> Result<u64> {
        Ok(self.repo.create(workspace).await?)
    }

    async fn find_by_id(&self, tenant_id: u64, workspace_id: u64) -> Result<Option<Workspace>> {
        Ok(self.repo.find_by_id(tenant_id, workspace_id).await?)
    }

    async fn find_by_short_name(
        &self,
        tenant_id: u64,
        short_name: &str,
    ) -> Result<Option<Workspace>> {
        Ok(self.repo.find_by_short_name(tenant_id, short_name).await?)
    }

    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<Workspace>> {
        Ok(self.repo.list(tenant_id, pagination).await?)
    }

    async fn update(&self, workspace: &Workspace) -> Result<()> {
        Ok(self.repo.update(workspace).await?)
    }

    async fn soft_delete(&self, tenant_id: u64, workspace_id: u64) -> Result<()> {
        Ok(self.repo.soft_delete(tenant_id, workspace_id).await?)
    }
}

pub struct SqlNotificationStore {
    repo: NotificationRepository,
}

impl SqlNotificationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: NotificationRepository::new(pool),
        }
    }
}

#[async_trait]
impl NotificationStore for SqlNotificationStore {
    async fn create(&self, notification: &Notification) -> Result<u64> {
        Ok(self.repo.create(notification).await?)
    }

    async fn list(
        &self,
        tenant_id: u64,
        user_id: u64,
        pagination: Pagination,
    ) -> Result<Vec<Notification>> {
        Ok(self.repo.list(tenant_id, user_id, pagination).await?)
    }

    async fn count_unread(&self, tenant_id: u64, user_id: u64) -> Result<u64> {
        Ok(self.repo.count_unread(tenant_id, user_id).await?)
    }

    async fn mark_read(&self, tenant_id: u64, user_id: u64, notification_id: u64) -> Result<()> {
        Ok(self
            .repo
            .mark_read(tenant_id, user_id, notification_id)
            .await?)
    }
}
