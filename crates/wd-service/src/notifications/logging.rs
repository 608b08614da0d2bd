use super::NotificationService;
use crate::chain::Decorator;
use crate::{Result, ServiceError};

use wd_core::{Notification, Pagination};

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

/// Logs every call with its outcome and latency, and wraps failures with
/// the operation name.
pub struct Logging {
    next: Arc<dyn NotificationService>,
}

impl Logging {
    pub fn new(next: Arc<dyn NotificationService>) -> Self {
        Self { next }
    }

    pub fn decorator() -> Decorator<dyn NotificationService> {
        Box::new(|next| Arc::new(Self::new(next)) as Arc<dyn NotificationService>)
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
                    "{op} [unit=notification_service status=success tenant_id={tenant_id} elapsed_ms={elapsed_ms}]"
                );
                Ok(value)
            }
            Err(e) => {
                log::error!(
                    "unable to {op} [unit=notification_service tenant_id={tenant_id} elapsed_ms={elapsed_ms} cause={e}]"
                );
                Err(ServiceError::context(format!("unable to {op}"), e))
            }
        }
    }
}

#[async_trait]
impl NotificationService for Logging {
    async fn notify(&self, tenant_id: u64, user_id: u64, message: &str) -> Result<Notification> {
        let started = Instant::now();
        let result = self.next.notify(tenant_id, user_id, message).await;
        Self::finish("deliver notification", tenant_id, started, result)
    }

    async fn broadcast(&self, tenant_id: u64, message: &str) -> Result<Notification> {
        let started = Instant::now();
        let result = self.next.broadcast(tenant_id, message).await;
        Self::finish("broadcast notification", tenant_id, started, result)
    }

    async fn list(
        &self,
        tenant_id: u64,
        user_id: u64,
        pagination: Pagination,
    ) -> Result<Vec<Notification>> {
        let started = Instant::now();
        let result = self.next.list(tenant_id, user_id, pagination).await;
        Self::finish("list notifications", tenant_id, started, result)
    }

    async fn count_unread(&self, tenant_id: u64, user_id: u64) -> Result<u64> {
        let started = Instant::now();
        let result = self.next.count_unread(tenant_id, user_id).await;
        Self::finish("count unread notifications", tenant_id, started, result)
    }

    async fn mark_read(&self, tenant_id: u64, user_id: u64, notification_id: u64) -> Result<()> {
        let started = Instant::now();
        let result = self.next.mark_read(tenant_id, user_id, notification_id).await;
        Self::finish("mark notification read", tenant_id, started, result)
    }
}
