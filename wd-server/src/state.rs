use wd_auth::{Authorization, JwtValidator};
use wd_cache::BoundedCache;
use wd_core::roles;
use wd_service::notifications::{self, NotificationService};
use wd_service::storage::{SqlNotificationStore, SqlUserStore, SqlWorkspaceStore};
use wd_service::users::{self, UserService};
use wd_service::workspaces::{self, WorkspaceService};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_validator: Arc<JwtValidator>,
    pub users: Arc<dyn UserService>,
    pub workspaces: Arc<dyn WorkspaceService>,
    pub notifications: Arc<dyn NotificationService>,
    /// Gate for operations reserved to tenant administrators.
    pub admin: Authorization,
}

impl AppState {
    /// Wire the full service stack over one pool and one shared cache.
    pub fn new(pool: SqlitePool, jwt_validator: JwtValidator, cache_capacity_bytes: u64) -> Self {
        let cache = BoundedCache::new(cache_capacity_bytes);

        Self {
            users: users::build(Arc::new(SqlUserStore::new(pool.clone())), cache.clone()),
            workspaces: workspaces::build(
                Arc::new(SqlWorkspaceStore::new(pool.clone())),
                cache.clone(),
            ),
            notifications: notifications::build(
                Arc::new(SqlNotificationStore::new(pool.clone())),
                cache,
            ),
            admin: Authorization::new(vec![roles::ADMIN.to_string()]),
            jwt_validator: Arc::new(jwt_validator),
            pool,
        }
    }
}
