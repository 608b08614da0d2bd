use crate::{AuthError, RequestScope, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Role-based gate for a route or service family.
///
/// The authorized role set is fixed at construction; per-call extra roles go
/// through [`Authorization::check_with_roles`].
#[derive(Debug, Clone)]
pub struct Authorization {
    authorized_roles: Vec<String>,
}

impl Authorization {
    pub fn new(authorized_roles: Vec<String>) -> Self {
        Self { authorized_roles }
    }

    /// Check that the scope is authenticated and holds any authorized role.
    #[track_caller]
    pub fn check(&self, scope: &RequestScope) -> AuthErrorResult<()> {
        let claims = scope.claims().ok_or_else(|| {
            log::warn!("malformed token: no claims bound [unit=authorization]");
            AuthError::MalformedToken {
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        if !has_any_of(&claims.roles, &self.authorized_roles) {
            return Err(self.permission_denied(scope));
        }
        Ok(())
    }

    /// Like [`Authorization::check`], also admitting any of `extra_roles`.
    #[track_caller]
    pub fn check_with_roles(
        &self,
        scope: &RequestScope,
        extra_roles: &[String],
    ) -> AuthErrorResult<()> {
        let claims = scope.claims().ok_or_else(|| {
            log::warn!("malformed token: no claims bound [unit=authorization]");
            AuthError::MalformedToken {
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        if !has_any_of(&claims.roles, &self.authorized_roles)
            && !has_any_of(&claims.roles, extra_roles)
        {
            return Err(self.permission_denied(scope));
        }
        Ok(())
    }

    #[track_caller]
    fn permission_denied(&self, scope: &RequestScope) -> AuthError {
        if let Some(claims) = scope.claims() {
            log::warn!(
                "permission denied [unit=authorization user_id={} tenant_id={} roles={:?}]",
                claims.id,
                claims.tenant_id,
                claims.roles,
            );
        }
        AuthError::PermissionDenied {
            authorized_roles: self.authorized_roles.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

fn has_any_of(roles: &[String], wanted: &[String]) -> bool {
    roles.iter().any(|r| wanted.iter().any(|w| w == r))
}
