//! Notification service: per-user messages plus tenant-wide broadcasts.

mod caching;
mod logging;
mod validation;

pub use caching::Caching;
pub use logging::Logging;
pub use validation::Validation;

use crate::Result;
use crate::chain::compose;

use wd_cache::BoundedCache;
use wd_core::{Notification, Pagination};

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

/// Recipient id reserved for tenant-wide broadcasts.
pub const BROADCAST_USER_ID: u64 = 0;

#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Deliver a message to one user.
    async fn notify(&self, tenant_id: u64, user_id: u64, message: &str) -> Result<Notification>;
    /// Deliver a message to every user in the tenant.
    async fn broadcast(&self, tenant_id: u64, message: &str) -> Result<Notification>;
    async fn list(
        &self,
        tenant_id: u64,
        user_id: u64,
        pagination: Pagination,
    ) -> Result<Vec<Notification>>;
    async fn count_unread(&self, tenant_id: u64, user_id: u64) -> Result<u64>;
    async fn mark_read(&self, tenant_id: u64, user_id: u64, notification_id: u64) -> Result<()>;
}

/// Persistence surface the notification service is written against.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn create(&self, notification: &Notification) -> Result<u64>;
    async fn list(
        &self,
        tenant_id: u64,
        user_id: u64,
        pagination: Pagination,
    ) -> Result<Vec<Notification>>;
    async fn count_unread(&self, tenant_id: u64, user_id: u64) -> Result<u64>;
    async fn mark_read(&self, tenant_id: u64, user_id: u64, notification_id: u64) -> Result<()>;
}

/// Base implementation; decorators wrap this.
pub struct NotificationManager {
    store: Arc<dyn NotificationStore>,
}

impl NotificationManager {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    async fn deliver(&self, tenant_id: u64, user_id: u64, message: &str) -> Result<Notification> {
        let mut notification = Notification {
            id: 0,
            tenant_id,
            user_id,
            message: message.to_string(),
            created_at: Utc::now(),
            read_at: None,
        };
        notification.id = self.store.create(&notification).await?;
        Ok(notification)
    }
}

#[async_trait]
impl NotificationService for NotificationManager {
    async fn notify(&self, tenant_id: u64, user_id: u64, message: &str) -> Result<Notification> {
        self.deliver(tenant_id, user_id, message).await
    }

    async fn broadcast(&self, tenant_id: u64, message: &str) -> Result<Notification> {
        self.deliver(tenant_id, BROADCAST_USER_ID, message).await
    }

    async fn list(
        &self,
        tenant_id: u64,
        user_id: u64,
        pagination: Pagination,
    ) -> Result<Vec<Notification>> {
        self.store.list(tenant_id, user_id, pagination).await
    }

    async fn count_unread(&self, tenant_id: u64, user_id: u64) -> Result<u64> {
        self.store.count_unread(tenant_id, user_id).await
    }

    async fn mark_read(&self, tenant_id: u64, user_id: u64, notification_id: u64) -> Result<()> {
        self.store
            .mark_read(tenant_id, user_id, notification_id)
            .await
    }
}

/// Assemble the full notification chain: validation outermost, then caching,
/// then logging, then the manager.
pub fn build(
    store: Arc<dyn NotificationStore>,
    cache: BoundedCache,
) -> Arc<dyn NotificationService> {
    let base: Arc<dyn NotificationService> = Arc::new(NotificationManager::new(store));
    compose(
        base,
        vec![
            Logging::decorator(),
            Caching::decorator(cache),
            Validation::decorator(),
        ],
    )
}
