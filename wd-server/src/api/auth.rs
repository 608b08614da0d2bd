//! Bearer token middleware.
//!
//! Verifies the token once per request and binds the resulting scope into
//! request extensions. Handlers never see an unverified token: a request
//! without a valid scope is rejected here with 401.

use crate::ApiError;
use crate::state::AppState;

use wd_auth::{AuthError, RequestScope};

use std::panic::Location;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use error_location::ErrorLocation;

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;
    let claims = state.jwt_validator.validate(token)?;
    request.extensions_mut().insert(RequestScope::bind(claims));
    Ok(next.run(request).await)
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(http::header::AUTHORIZATION)
        .ok_or(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let value = header.to_str().map_err(|_| AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    })?;

    value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })
}
