//! In-memory stores instrumented with call counters.

use crate::notifications::NotificationStore;
use crate::users::{NewUser, UserStore};
use crate::workspaces::{NewWorkspace, WorkspaceStore};
use crate::{Result, ServiceError};

use wd_core::{Notification, Pagination, User, Workspace};
use wd_db::DbError;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

fn no_rows_updated() -> ServiceError {
    ServiceError::Db {
        source: DbError::NoRowsUpdated {
            location: ErrorLocation::from(Location::caller()),
        },
    }
}

fn no_rows_deleted() -> ServiceError {
    ServiceError::Db {
        source: DbError::NoRowsDeleted {
            location: ErrorLocation::from(Location::caller()),
        },
    }
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        username: username.to_string(),
        password: "Str0ngPass".to_string(),
        roles: vec!["authenticated".to_string()],
    }
}

pub fn new_workspace(short_name: &str) -> NewWorkspace {
    NewWorkspace {
        name: format!("Workspace {short_name}"),
        short_name: short_name.to_string(),
        description: String::new(),
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    next_id: AtomicU64,
    pub lookups: AtomicUsize,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: &User) -> Result<u64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut stored = user.clone();
        stored.id = id;
        self.users.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn find_by_id(&self, tenant_id: u64, user_id: u64) -> Result<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.tenant_id == tenant_id && u.id == user_id && u.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_username(&self, tenant_id: u64, username: &str) -> Result<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.tenant_id == tenant_id && u.username == username && u.deleted_at.is_none())
            .cloned())
    }

    async fn list(&self, tenant_id: u64, _pagination: Pagination) -> Result<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.tenant_id == tenant_id && u.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn update(&self, user: &User) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| u.tenant_id == user.tenant_id && u.id == user.id && u.deleted_at.is_none())
        {
            Some(slot) => {
                *slot = user.clone();
                Ok(())
            }
            None => Err(no_rows_updated()),
        }
    }

    async fn update_password(
        &self,
        tenant_id: u64,
        user_id: u64,
        password_hash: &str,
    ) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| u.tenant_id == tenant_id && u.id == user_id && u.deleted_at.is_none())
        {
            Some(user) => {
                user.password = password_hash.to_string();
                Ok(())
            }
            None => Err(no_rows_updated()),
        }
    }

    async fn soft_delete(&self, tenant_id: u64, user_id: u64) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| u.tenant_id == tenant_id && u.id == user_id && u.deleted_at.is_none())
        {
            Some(user) => {
                user.deleted_at = Some(Utc::now());
                Ok(())
            }
            None => Err(no_rows_deleted()),
        }
    }
}

#[derive(Default)]
pub struct MemoryWorkspaceStore {
    workspaces: Mutex<Vec<Workspace>>,
    next_id: AtomicU64,
    pub lookups: AtomicUsize,
}

#[async_trait]
impl WorkspaceStore for MemoryWorkspaceStore {
    async fn create(&self, workspace: &Workspace) -> Result<u64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut stored = workspace.clone();
        stored.id = id;
        self.workspaces.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn find_by_id(&self, tenant_id: u64, workspace_id: u64) -> Result<Option<Workspace>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .workspaces
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.tenant_id == tenant_id && w.id == workspace_id && w.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_short_name(
        &self,
        tenant_id: u64,
        short_name: &str,
    ) -> Result<Option<Workspace>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .workspaces
            .lock()
            .unwrap()
            .iter()
            .find(|w| {
                w.tenant_id == tenant_id && w.short_name == short_name && w.deleted_at.is_none()
            })
            .cloned())
    }

    async fn list(&self, tenant_id: u64, _pagination: Pagination) -> Result<Vec<Workspace>> {
        Ok(self
            .workspaces
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.tenant_id == tenant_id && w.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn update(&self, workspace: &Workspace) -> Result<()> {
        let mut workspaces = self.workspaces.lock().unwrap();
        match workspaces.iter_mut().find(|w| {
            w.tenant_id == workspace.tenant_id && w.id == workspace.id && w.deleted_at.is_none()
        }) {
            Some(slot) => {
                *slot = workspace.clone();
                Ok(())
            }
            None => Err(no_rows_updated()),
        }
    }

    async fn soft_delete(&self, tenant_id: u64, workspace_id: u64) -> Result<()> {
        let mut workspaces = self.workspaces.lock().unwrap();
        match workspaces
            .iter_mut()
            .find(|w| w.tenant_id == tenant_id && w.id == workspace_id && w.deleted_at.is_none())
        {
            Some(workspace) => {
                workspace.deleted_at = Some(Utc::now());
                Ok(())
            }
            None => Err(no_rows_deleted()),
        }
    }
}

#[derive(Default)]
pub struct MemoryNotificationStore {
    notifications: Mutex<Vec<Notification>>,
    // Read marks keyed by (notification id, user id); broadcasts stay
    // unread for users who have not marked them.
    reads: Mutex<HashMap<(u64, u64), DateTime<Utc>>>,
    next_id: AtomicU64,
    pub count_calls: AtomicUsize,
}

#[async_trait]
impl NotificationStore for MemoryNotificationStore {
    async fn create(&self, notification: &Notification) -> Result<u64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut stored = notification.clone();
        stored.id = id;
        self.notifications.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn list(
        &self,
        tenant_id: u64,
        user_id: u64,
        _pagination: Pagination,
    ) -> Result<Vec<Notification>> {
        let reads = self.reads.lock().unwrap();
        let mut visible: Vec<Notification> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.tenant_id == tenant_id && (n.user_id == user_id || n.user_id == 0))
            .cloned()
            .map(|mut n| {
                n.read_at = reads.get(&(n.id, user_id)).copied();
                n
            })
            .collect();
        visible.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(visible)
    }

    async fn count_unread(&self, tenant_id: u64, user_id: u64) -> Result<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        let reads = self.reads.lock().unwrap();
        Ok(self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| {
                n.tenant_id == tenant_id
                    && (n.user_id == user_id || n.user_id == 0)
                    && !reads.contains_key(&(n.id, user_id))
            })
            .count() as u64)
    }

    async fn mark_read(&self, tenant_id: u64, user_id: u64, notification_id: u64) -> Result<()> {
        let visible = self.notifications.lock().unwrap().iter().any(|n| {
            n.tenant_id == tenant_id
                && n.id == notification_id
                && (n.user_id == user_id || n.user_id == 0)
        });
        if !visible {
            return Err(no_rows_updated());
        }
        let mut reads = self.reads.lock().unwrap();
        if reads.insert((notification_id, user_id), Utc::now()).is_some() {
            return Err(no_rows_updated());
        }
        Ok(())
    }
}
