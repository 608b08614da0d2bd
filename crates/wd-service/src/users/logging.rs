use super::{NewUser, UserService};
use crate::chain::Decorator;
use crate::{Result, ServiceError};

use wd_core::{Pagination, User};

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

/// Logs every call with its outcome and latency, and wraps failures with
/// the operation name.
pub struct Logging {
    next: Arc<dyn UserService>,
}

impl Logging {
    pub fn new(next: Arc<dyn UserService>) -> Self {
        Self { next }
    }

    pub fn decorator() -> Decorator<dyn UserService> {
        Box::new(|next| Arc::new(Self::new(next)) as Arc<dyn UserService>)
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
                    "{op} [unit=user_service status=success tenant_id={tenant_id} elapsed_ms={elapsed_ms}]"
                );
                Ok(value)
            }
            Err(e) => {
                log::error!(
                    "unable to {op} [unit=user_service tenant_id={tenant_id} elapsed_ms={elapsed_ms} cause={e}]"
                );
                Err(ServiceError::context(format!("unable to {op}"), e))
            }
        }
    }
}

#[async_trait]
impl UserService for Logging {
    async fn create(&self, tenant_id: u64, new_user: NewUser) -> Result<User> {
        let started = Instant::now();
        let result = self.next.create(tenant_id, new_user).await;
        Self::finish("create user", tenant_id, started, result)
    }

    async fn get(&self, tenant_id: u64, user_id: u64) -> Result<User> {
        let started = Instant::now();
        let result = self.next.get(tenant_id, user_id).await;
        Self::finish("get user", tenant_id, started, result)
    }

    async fn get_by_username(&self, tenant_id: u64, username: &str) -> Result<User> {
        let started = Instant::now();
        let result = self.next.get_by_username(tenant_id, username).await;
        Self::finish("get user by username", tenant_id, started, result)
    }

    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<User>> {
        let started = Instant::now();
        let result = self.next.list(tenant_id, pagination).await;
        Self::finish("list users", tenant_id, started, result)
    }

    async fn update(&self, tenant_id: u64, user: User) -> Result<User> {
        let started = Instant::now();
        let result = self.next.update(tenant_id, user).await;
        Self::finish("update user", tenant_id, started, result)
    }

    async fn update_password(&self, tenant_id: u64, user_id: u64, password: &str) -> Result<()> {
        let started = Instant::now();
        let result = self.next.update_password(tenant_id, user_id, password).await;
        Self::finish("update user password", tenant_id, started, result)
    }

    async fn delete(&self, tenant_id: u64, user_id: u64) -> Result<()> {
        let started = Instant::now();
        let result = self.next.delete(tenant_id, user_id).await;
        Self::finish("delete user", tenant_id, started, result)
    }
}
