//! Workspace REST API handlers.

use crate::api::delete_response::DeleteResponse;
use crate::api::extractors::auth_scope::Auth;
use crate::api::list_query::ListQuery;
use crate::state::AppState;
use crate::{
    ApiResult, CreateWorkspaceRequest, UpdateWorkspaceRequest, WorkspaceDto, WorkspaceListResponse,
    WorkspaceResponse,
};

use wd_core::WorkspaceStatus;
use wd_service::ServiceError;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use error_location::ErrorLocation;

/// POST /api/v1/workspaces
pub async fn create_workspace(
    State(state): State<AppState>,
    auth: Auth,
    Json(request): Json<CreateWorkspaceRequest>,
) -> ApiResult<Json<WorkspaceResponse>> {
    let workspace = state
        .workspaces
        .create(auth.identity.tenant_id, auth.identity.user_id, request.into())
        .await?;

    Ok(Json(WorkspaceResponse {
        workspace: workspace.into(),
    }))
}

/// GET /api/v1/workspaces
pub async fn list_workspaces(
    State(state): State<AppState>,
    auth: Auth,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<WorkspaceListResponse>> {
    let workspaces = state
        .workspaces
        .list(auth.identity.tenant_id, query.pagination())
        .await?;

    Ok(Json(WorkspaceListResponse {
        workspaces: workspaces.into_iter().map(WorkspaceDto::from).collect(),
    }))
}

/// GET /api/v1/workspaces/{id}
pub async fn get_workspace(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<u64>,
) -> ApiResult<Json<WorkspaceResponse>> {
    let workspace = state.workspaces.get(auth.identity.tenant_id, id).await?;

    Ok(Json(WorkspaceResponse {
        workspace: workspace.into(),
    }))
}

/// PUT /api/v1/workspaces/{id}
pub async fn update_workspace(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<u64>,
    Json(request): Json<UpdateWorkspaceRequest>,
) -> ApiResult<Json<WorkspaceResponse>> {
    let status =
        WorkspaceStatus::from_str(&request.status).map_err(|_| ServiceError::Validation {
            field: "status",
            message: format!("unrecognized status: {}", request.status),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let mut workspace = state.workspaces.get(auth.identity.tenant_id, id).await?;
    workspace.name = request.name;
    workspace.description = request.description;
    workspace.status = status;

    let workspace = state
        .workspaces
        .update(auth.identity.tenant_id, workspace)
        .await?;

    Ok(Json(WorkspaceResponse {
        workspace: workspace.into(),
    }))
}

/// DELETE /api/v1/workspaces/{id}
pub async fn delete_workspace(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<u64>,
) -> ApiResult<Json<DeleteResponse>> {
    state.workspaces.delete(auth.identity.tenant_id, id).await?;

    Ok(Json(DeleteResponse::ok()))
}
