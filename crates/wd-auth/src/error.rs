use wd_core::{Categorized, ErrorCategory};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Token not valid yet {location}")]
    TokenNotYetValid { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed token: no claims bound to request {location}")]
    MalformedToken { location: ErrorLocation },

    #[error("Invalid tenant in token {location}")]
    InvalidTenant { location: ErrorLocation },

    #[error("Permission denied, authorized roles: {authorized_roles:?} {location}")]
    PermissionDenied {
        authorized_roles: Vec<String>,
        location: ErrorLocation,
    },
}

impl Categorized for AuthError {
    fn category(&self) -> ErrorCategory {
        // Everything here is an authentication/authorization failure; the
        // human-readable cause is the only detail that leaves the core.
        ErrorCategory::Unauthorized
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
