use super::{NewUser, UserService};
use crate::chain::Decorator;
use crate::{Result, ServiceError, password};

use wd_core::{Pagination, User, roles};

use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use error_location::ErrorLocation;

const MAX_NAME_LEN: usize = 128;
const MAX_USERNAME_LEN: usize = 64;

/// Rejects malformed input before it reaches any deeper layer.
pub struct Validation {
    next: Arc<dyn UserService>,
}

impl Validation {
    pub fn new(next: Arc<dyn UserService>) -> Self {
        Self { next }
    }

    pub fn decorator() -> Decorator<dyn UserService> {
        Box::new(|next| Arc::new(Self::new(next)) as Arc<dyn UserService>)
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

    fn check_username(username: &str) -> Result<()> {
        if username.is_empty() {
            return Err(invalid("username", "must not be empty"));
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(invalid("username", "exceeds maximum length"));
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        {
            return Err(invalid("username", "contains unsupported characters"));
        }
        Ok(())
    }

    fn check_profile(first_name: &str, last_name: &str, role_names: &[String]) -> Result<()> {
        if first_name.is_empty() || first_name.chars().count() > MAX_NAME_LEN {
            return Err(invalid("first_name", "must be 1 to 128 characters"));
        }
        if last_name.is_empty() || last_name.chars().count() > MAX_NAME_LEN {
            return Err(invalid("last_name", "must be 1 to 128 characters"));
        }
        for role in role_names {
            if !roles::is_known(role) {
                return Err(invalid("roles", "unrecognized role name"));
            }
        }
        Ok(())
    }
}

#[track_caller]
fn invalid(field: &'static str, message: &str) -> ServiceError {
    ServiceError::Validation {
        field,
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl UserService for Validation {
    async fn create(&self, tenant_id: u64, new_user: NewUser) -> Result<User> {
        Self::check_tenant(tenant_id)?;
        Self::check_username(&new_user.username)?;
        Self::check_profile(&new_user.first_name, &new_user.last_name, &new_user.roles)?;
        password::check_strength(&new_user.password)?;
        self.next.create(tenant_id, new_user).await
    }

    async fn get(&self, tenant_id: u64, user_id: u64) -> Result<User> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("user id", user_id)?;
        self.next.get(tenant_id, user_id).await
    }

    async fn get_by_username(&self, tenant_id: u64, username: &str) -> Result<User> {
        Self::check_tenant(tenant_id)?;
        Self::check_username(username)?;
        self.next.get_by_username(tenant_id, username).await
    }

    async fn list(&self, tenant_id: u64, pagination: Pagination) -> Result<Vec<User>> {
        Self::check_tenant(tenant_id)?;
        self.next.list(tenant_id, pagination).await
    }

    async fn update(&self, tenant_id: u64, user: User) -> Result<User> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("user id", user.id)?;
        Self::check_username(&user.username)?;
        Self::check_profile(&user.first_name, &user.last_name, &user.roles)?;
        self.next.update(tenant_id, user).await
    }

    async fn update_password(&self, tenant_id: u64, user_id: u64, password_str: &str) -> Result<()> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("user id", user_id)?;
        password::check_strength(password_str)?;
        self.next.update_password(tenant_id, user_id, password_str).await
    }

    async fn delete(&self, tenant_id: u64, user_id: u64) -> Result<()> {
        Self::check_tenant(tenant_id)?;
        Self::check_id("user id", user_id)?;
        self.next.delete(tenant_id, user_id).await
    }
}
