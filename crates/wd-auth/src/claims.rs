use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// JWT claims payload - matches the platform token format.
///
/// Application claims use the wire names the token issuer emits
/// (`tenantID`, `firstName`, ...); the standard temporal claims keep their
/// registered short names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id; 0 means unset (technical callers)
    #[serde(default)]
    pub id: u64,
    /// Tenant identifier; 0 is never a valid tenant
    #[serde(rename = "tenantID", default)]
    pub tenant_id: u64,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,

    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    #[serde(default)]
    pub iat: i64,
    /// Not before timestamp (Unix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

const MAX_ROLE_LEN: usize = 64;

impl Claims {
    /// Validate application claims after the JWT envelope has been verified.
    ///
    /// The outcome is logged on both paths, with identity fields, for the
    /// audit trail. A failed validation leaves no partial state behind.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if let Err(e) = self.check_application_claims() {
            log::warn!(
                "claims rejected [unit=authentication status=failure user_id={} tenant_id={} roles={:?} cause={}]",
                self.id,
                self.tenant_id,
                self.roles,
                e,
            );
            return Err(e);
        }

        log::info!(
            "claims validated [unit=authentication status=success user_id={} tenant_id={} roles={:?}]",
            self.id,
            self.tenant_id,
            self.roles,
        );
        Ok(())
    }

    #[track_caller]
    fn check_application_claims(&self) -> AuthErrorResult<()> {
        // Tenant identity is mandatory for data isolation; 0 means "no
        // tenant", never a default. A zero user id stays legal here because
        // technical callers operate at tenant level.
        if self.tenant_id == 0 {
            return Err(AuthError::InvalidClaim {
                claim: "tenantID".to_string(),
                message: "tenantID must be non-zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        for role in &self.roles {
            if role.is_empty() {
                return Err(AuthError::InvalidClaim {
                    claim: "roles".to_string(),
                    message: "role name cannot be empty".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if role.len() > MAX_ROLE_LEN {
                return Err(AuthError::InvalidClaim {
                    claim: "roles".to_string(),
                    message: "role name exceeds maximum length".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }

    /// Human-readable identity for diagnostics.
    pub fn display_identity(&self) -> String {
        format!("UserID: {}, TenantID: {}", self.id, self.tenant_id)
    }
}
