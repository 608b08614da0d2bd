//! User service: tenant-scoped account management.

mod caching;
mod logging;
mod validation;

pub use caching::Caching;
pub use logging::Logging;
pub use validation::Validation;

use crate::chain::compose;
use crate::{Result, ServiceError, password};

use wd_cache::BoundedCache;
use wd_core::{Pagination, User, UserStatus};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Profile fields accepted when creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub roles: Vec<String>,
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn create(&self, tenant_id: u64, new_user: NewUser) -> Result<User>;
    async fn get(&self, tenant_id: u64, user_id: u64) -> Result<User>;
    async fn get_by_username(&self, tenant_id: u64, username: &str) -> Result<User>;
    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<User>>;
    async fn update(&self, tenant_id: u64, user: User) -> Result<User>;
    async fn update_password(&self, tenant_id: u64, user_id: u64, password: &str) -> Result<()>;
    async fn delete(&self, tenant_id: u64, user_id: u64) -> Result<()>;
}

/// Persistence surface the user service is written against.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, user: &User) -> Result<u64>;
    async fn find_by_id(&self, tenant_id: u64, user_id: u64) -> Result<Option<User>>;
    async fn find_by_username(&self, tenant_id: u64, username: &str) -> Result<Option<User>>;
    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<User>>;
    async fn update(&self, user: &User) -> Result<()>;
    async fn update_password(&self, tenant_id: u64, user_id: u64, password_hash: &str)
    -> Result<()>;
    async fn soft_delete(&self, tenant_id: u64, user_id: u64) -> Result<()>;
}

/// Base implementation; decorators wrap this.
pub struct UserManager {
    store: Arc<dyn UserStore>,
}

impl UserManager {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create(&self, tenant_id: u64, new_user: NewUser) -> Result<User> {
        if self
            .store
            .find_by_username(tenant_id, &new_user.username)
            .await?
            .is_some()
        {
            return Err(ServiceError::AlreadyExists {
                entity: "user",
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = Utc::now();
        let mut user = User {
            id: 0,
            tenant_id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            username: new_user.username,
            password: password::hash(&new_user.password),
            status: UserStatus::Active,
            roles: new_user.roles,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        user.id = self.store.create(&user).await?;
        Ok(user)
    }

    async fn get(&self, tenant_id: u64, user_id: u64) -> Result<User> {
        self.store
            .find_by_id(tenant_id, user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                entity: "user",
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn get_by_username(&self, tenant_id: u64, username: &str) -> Result<User> {
        self.store
            .find_by_username(tenant_id, username)
            .await?
            .ok_or_else(|| ServiceError::NotFound {
                entity: "user",
                location: ErrorLocation::from(Location::caller()),
            })
    }

    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<User>> {
        self.store.list(tenant_id, pagination).await
    }

    async fn update(&self, tenant_id: u64, mut user: User) -> Result<User> {
        user.tenant_id = tenant_id;
        user.updated_at = Utc::now();
        self.store.update(&user).await?;
        Ok(user)
    }

    async fn update_password(&self, tenant_id: u64, user_id: u64, password: &str) -> Result<()> {
        self.store
            .update_password(tenant_id, user_id, &password::hash(password))
            .await
    }

    async fn delete(&self, tenant_id: u64, user_id: u64) -> Result<()> {
        self.store.soft_delete(tenant_id, user_id).await
    }
}

/// Assemble the full user chain: validation outermost, then caching, then
/// logging, then the manager.
pub fn build(store: Arc<dyn UserStore>, cache: BoundedCache) -> Arc<dyn UserService> {
    let base: Arc<dyn UserService> = Arc::new(UserManager::new(store));
    compose(
        base,
        vec![
            Logging::decorator(),
            Caching::decorator(cache),
            Validation::decorator(),
        ],
    )
}
