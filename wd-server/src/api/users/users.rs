//! User REST API handlers.
//!
//! Every handler receives its tenant scope from the verified token; client
//! supplied tenant identifiers are never accepted.

use crate::api::delete_response::DeleteResponse;
use crate::api::extractors::auth_scope::Auth;
use crate::api::list_query::ListQuery;
use crate::state::AppState;
use crate::{
    ApiResult, CreateUserRequest, UpdatePasswordRequest, UpdateUserRequest, UserDto,
    UserListResponse, UserResponse,
};

use wd_core::UserStatus;
use wd_service::ServiceError;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

/// POST /api/v1/users
///
/// Create a user (admin only)
pub async fn create_user(
    State(state): State<AppState>,
    auth: Auth,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    state.admin.check(&auth.scope)?;

    let user = state
        .users
        .create(auth.identity.tenant_id, request.into())
        .await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: Auth,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let users = state
        .users
        .list(auth.identity.tenant_id, query.pagination())
        .await?;

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<u64>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.users.get(auth.identity.tenant_id, id).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/users/{id}
///
/// Update profile fields (admin only)
pub async fn update_user(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<u64>,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    state.admin.check(&auth.scope)?;

    let status = UserStatus::from_str(&request.status).map_err(|_| ServiceError::Validation {
        field: "status",
        message: format!("unrecognized status: {}", request.status),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let mut user = state.users.get(auth.identity.tenant_id, id).await?;
    user.first_name = request.first_name;
    user.last_name = request.last_name;
    user.status = status;
    user.roles = request.roles;

    let user = state.users.update(auth.identity.tenant_id, user).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/users/{id}/password
///
/// Change a password. Users may change their own; admins may change any.
pub async fn update_password(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<u64>,
    Json(request): Json<UpdatePasswordRequest>,
) -> ApiResult<StatusCode> {
    if auth.identity.user_id != id {
        state.admin.check(&auth.scope)?;
    }

    state
        .users
        .update_password(auth.identity.tenant_id, id, &request.password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/users/{id}
///
/// Soft-delete a user (admin only)
pub async fn delete_user(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<u64>,
) -> ApiResult<Json<DeleteResponse>> {
    state.admin.check(&auth.scope)?;

    state.users.delete(auth.identity.tenant_id, id).await?;

    Ok(Json(DeleteResponse::ok()))
}
