use super::{NewUser, UserService};
use crate::Result;
use crate::chain::Decorator;

use wd_cache::{BoundedCache, CacheKey, KeyBuilder};
use wd_core::{Pagination, User};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

const USER_TTL: Duration = Duration::from_secs(60);

/// Serves repeat lookups from the bounded cache. Write operations call
/// through first, then drop every key the write could have made stale.
pub struct Caching {
    next: Arc<dyn UserService>,
    cache: BoundedCache,
}

impl Caching {
    pub fn new(next: Arc<dyn UserService>, cache: BoundedCache) -> Self {
        Self { next, cache }
    }

    pub fn decorator(cache: BoundedCache) -> Decorator<dyn UserService> {
        Box::new(move |next| Arc::new(Self::new(next, cache)) as Arc<dyn UserService>)
    }

    fn id_key(tenant_id: u64, user_id: u64) -> CacheKey {
        KeyBuilder::new("user.by_id")
            .with_u64(tenant_id)
            .with_u64(user_id)
            .build()
    }

    fn username_key(tenant_id: u64, username: &str) -> CacheKey {
        KeyBuilder::new("user.by_username")
            .with_u64(tenant_id)
            .with_str(username)
            .build()
    }

    fn evict(&self, tenant_id: u64, user_id: u64, username: &str) {
        self.cache.invalidate(&Self::id_key(tenant_id, user_id));
        self.cache
            .invalidate(&Self::username_key(tenant_id, username));
    }
}

#[async_trait]
impl UserService for Caching {
    async fn create(&self, tenant_id: u64, new_user: NewUser) -> Result<User> {
        self.next.create(tenant_id, new_user).await
    }

    async fn get(&self, tenant_id: u64, user_id: u64) -> Result<User> {
        let entry = self.cache.entry(Self::id_key(tenant_id, user_id));
        if let Some(user) = entry.get::<User>() {
            return Ok(user);
        }
        let user = self.next.get(tenant_id, user_id).await?;
        entry.set(USER_TTL, &user);
        Ok(user)
    }

    async fn get_by_username(&self, tenant_id: u64, username: &str) -> Result<User> {
        let entry = self.cache.entry(Self::username_key(tenant_id, username));
        if let Some(user) = entry.get::<User>() {
            return Ok(user);
        }
        let user = self.next.get_by_username(tenant_id, username).await?;
        entry.set(USER_TTL, &user);
        Ok(user)
    }

    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<User>> {
        self.next.list(tenant_id, pagination).await
    }

    async fn update(&self, tenant_id: u64, user: User) -> Result<User> {
        let user = self.next.update(tenant_id, user).await?;
        self.evict(tenant_id, user.id, &user.username);
        Ok(user)
    }

    async fn update_password(&self, tenant_id: u64, user_id: u64, password: &str) -> Result<()> {
        self.next
            .update_password(tenant_id, user_id, password)
            .await?;
        self.cache.invalidate(&Self::id_key(tenant_id, user_id));
        Ok(())
    }

    async fn delete(&self, tenant_id: u64, user_id: u64) -> Result<()> {
        // Fetch first so the username key can be dropped as well.
        let cached: Option<User> = self.cache.entry(Self::id_key(tenant_id, user_id)).get();
        self.next.delete(tenant_id, user_id).await?;
        self.cache.invalidate(&Self::id_key(tenant_id, user_id));
        if let Some(user) = cached {
            self.cache
                .invalidate(&Self::username_key(tenant_id, &user.username));
        }
        Ok(())
    }
}
