use super::NotificationService;
use crate::chain::Decorator;
use crate::{Result, ServiceError};

use wd_core::{Notification, Pagination};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;

const MAX_MESSAGE_LEN: usize = 1024;

/// Rejects malformed input before it reaches any deeper layer.
pub struct Validation {
    next: Arc<dyn NotificationService>,
}

impl Validation {
    pub fn new(next: Arc<dyn NotificationService>) -> Self {
        Self { next }
    }

    pub fn decorator() -> Decorator<dyn NotificationService> {
        Box::new(|next| Arc::new(Self::new(next)) as Arc<dyn NotificationService>)
    }

    #[track_caller]
    fn check_tenant(tenant_id: u64) -> Result<()> {
        if tenant_id == 0 {
            return Err(ServiceError::InvalidParameters {
                message: "tenant id must be non-zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    #[track_caller]
    fn check_id(field: &'static str, id: u64) -> Result<()> {
        if id == 0 {
            return Err(ServiceError::InvalidParameters {
                message: format!("{field} must be non-zero"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    #[track_caller]
    fn check_message(message: &str) -> Result<()> {
        if message.is_empty() {
            return Err(ServiceError::Validation {
                field: "message",
                message: "must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if message.chars().count() > MAX_MESSAGE_LEN {
            return Err(ServiceError::Validation {
                field: "message",
                message: "exceeds maximum length".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationService for Validation {
    async fn notify(&self, tenant_id: u64, user_id: u64, message: &str) -> Result<Notification> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("user id", user_id)?;
        Self::check_message(message)?;
        self.next.notify(tenant_id, user_id, message).await
    }

    async fn broadcast(&self, tenant_id: u64, message: &str) -> Result<Notification> {
        Self::check_tenant(tenant_id)?;
        Self::check_message(message)?;
        self.next.broadcast(tenant_id, message).await
    }

    async fn list(
        &self,
        tenant_id: u64,
        user_id: u64,
        pagination: Pagination,
    ) -> Result<Vec<Notification>> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("user id", user_id)?;
        self.next.list(tenant_id, user_id, pagination).await
    }

    async fn count_unread(&self, tenant_id: u64, user_id: u64) -> Result<u64> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("user id", user_id)?;
        self.next.count_unread(tenant_id, user_id).await
    }

    async fn mark_read(&self, tenant_id: u64, user_id: u64, notification_id: u64) -> Result<()> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("user id", user_id)?;
        Self::check_id("notification id", notification_id)?;
        self.next
            .mark_read(tenant_id, user_id, notification_id)
            .await
    }
}
