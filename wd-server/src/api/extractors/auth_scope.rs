//! Axum extractor surfacing the verified request scope.

use crate::ApiError;
use crate::state::AppState;

use wd_auth::{AuthError, Identity, RequestScope};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// The caller's verified identity plus the scope it came from.
///
/// Only constructible on routes behind the auth middleware; anywhere else
/// the extraction fails with 401.
pub struct Auth {
    pub identity: Identity,
    pub scope: RequestScope,
}

impl FromRequestParts<AppState> for Auth {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let scope = parts
                .extensions
                .get::<RequestScope>()
                .cloned()
                .ok_or(AuthError::MalformedToken {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let identity = Identity::from_scope(&scope)?;
            Ok(Auth { identity, scope })
        }
    }
}
