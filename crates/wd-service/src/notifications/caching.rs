use super::NotificationService;
use crate::Result;
use crate::chain::Decorator;

use wd_cache::{BoundedCache, CacheKey, KeyBuilder};
use wd_core::{Notification, Pagination};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

// Unread counts change often; keep them only briefly. A broadcast cannot
// invalidate every recipient's count, so the TTL also bounds that staleness.
const UNREAD_COUNT_TTL: Duration = Duration::from_secs(5);

/// Caches unread counts per recipient. Lists pass through.
pub struct Caching {
    next: Arc<dyn NotificationService>,
    cache: BoundedCache,
}

impl Caching {
    pub fn new(next: Arc<dyn NotificationService>, cache: BoundedCache) -> Self {
        Self { next, cache }
    }

    pub fn decorator(cache: BoundedCache) -> Decorator<dyn NotificationService> {
        Box::new(move |next| Arc::new(Self::new(next, cache)) as Arc<dyn NotificationService>)
    }

    fn count_key(tenant_id: u64, user_id: u64) -> CacheKey {
        KeyBuilder::new("notification.unread_count")
            .with_u64(tenant_id)
            .with_u64(user_id)
            .build()
    }
}

#[async_trait]
impl NotificationService for Caching {
    async fn notify(&self, tenant_id: u64, user_id: u64, message: &str) -> Result<Notification> {
        let notification = self.next.notify(tenant_id, user_id, message).await?;
        self.cache
            .invalidate(&Self::count_key(tenant_id, user_id));
        Ok(notification)
    }

    async fn broadcast(&self, tenant_id: u64, message: &str) -> Result<Notification> {
        self.next.broadcast(tenant_id, message).await
    }

    async fn list(
        &self,
        tenant_id: u64,
        user_id: u64,
        pagination: Pagination,
    ) -> Result<Vec<Notification>> {
        self.next.list(tenant_id, user_id, pagination).await
    }

    async fn count_unread(&self, tenant_id: u64, user_id: u64) -> Result<u64> {
        let entry = self.cache.entry(Self::count_key(tenant_id, user_id));
        if let Some(count) = entry.get::<u64>() {
            return Ok(count);
        }
        let count = self.next.count_unread(tenant_id, user_id).await?;
        entry.set(UNREAD_COUNT_TTL, &count);
        Ok(count)
    }

    async fn mark_read(&self, tenant_id: u64, user_id: u64, notification_id: u64) -> Result<()> {
        self.next
            .mark_read(tenant_id, user_id, notification_id)
            .await?;
        self.cache
            .invalidate(&Self::count_key(tenant_id, user_id));
        Ok(())
    }
}
