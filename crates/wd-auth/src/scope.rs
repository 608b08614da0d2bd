use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Per-request binding of verified claims.
///
/// A scope is constructed exactly once, after token verification, and is
/// immutable for the lifetime of the call. Invalid claims are never bound:
/// the auth middleware rejects the request before a scope exists.
#[derive(Debug, Clone)]
pub struct RequestScope {
    claims: Option<Claims>,
}

impl RequestScope {
    /// Bind verified claims to a new scope.
    pub fn bind(claims: Claims) -> Self {
        Self {
            claims: Some(claims),
        }
    }

    /// A scope with no identity, for routes that do not require a token.
    pub fn anonymous() -> Self {
        Self { claims: None }
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// Tenant identity for the call.
    ///
    /// Fails when no claims are bound, and when the bound claims carry a
    /// zero tenant: tenant identity must never silently default.
    #[track_caller]
    pub fn tenant_id(&self) -> AuthErrorResult<u64> {
        let claims = self.claims.as_ref().ok_or(AuthError::MalformedToken {
            location: ErrorLocation::from(Location::caller()),
        })?;
        if claims.tenant_id == 0 {
            return Err(AuthError::InvalidTenant {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(claims.tenant_id)
    }

    /// User identity for the call.
    ///
    /// Fails only when no claims are bound; a zero user id is a legitimate
    /// value for technical callers and is returned as-is.
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<u64> {
        let claims = self.claims.as_ref().ok_or(AuthError::MalformedToken {
            location: ErrorLocation::from(Location::caller()),
        })?;
        Ok(claims.id)
    }

    /// Roles carried by the bound claims; empty when anonymous.
    pub fn roles(&self) -> &[String] {
        self.claims.as_ref().map(|c| c.roles.as_slice()).unwrap_or(&[])
    }
}
