//! Notification REST API handlers.
//!
//! Listing and counting always run against the caller's own identity; a
//! user cannot read another user's notifications through this surface.

use crate::api::extractors::auth_scope::Auth;
use crate::api::list_query::ListQuery;
use crate::state::AppState;
use crate::{
    ApiResult, BroadcastRequest, NotificationDto, NotificationListResponse, NotificationResponse,
    NotifyRequest, UnreadCountResponse,
};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

/// POST /api/v1/notifications
///
/// Deliver a notification to one user (admin only)
pub async fn notify(
    State(state): State<AppState>,
    auth: Auth,
    Json(request): Json<NotifyRequest>,
) -> ApiResult<Json<NotificationResponse>> {
    state.admin.check(&auth.scope)?;

    let notification = state
        .notifications
        .notify(auth.identity.tenant_id, request.user_id, &request.message)
        .await?;

    Ok(Json(NotificationResponse {
        notification: notification.into(),
    }))
}

/// POST /api/v1/notifications/broadcast
///
/// Deliver a notification to every user in the tenant (admin only)
pub async fn broadcast(
    State(state): State<AppState>,
    auth: Auth,
    Json(request): Json<BroadcastRequest>,
) -> ApiResult<Json<NotificationResponse>> {
    state.admin.check(&auth.scope)?;

    let notification = state
        .notifications
        .broadcast(auth.identity.tenant_id, &request.message)
        .await?;

    Ok(Json(NotificationResponse {
        notification: notification.into(),
    }))
}

/// GET /api/v1/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: Auth,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<NotificationListResponse>> {
    let notifications = state
        .notifications
        .list(
            auth.identity.tenant_id,
            auth.identity.user_id,
            query.pagination(),
        )
        .await?;

    Ok(Json(NotificationListResponse {
        notifications: notifications.into_iter().map(NotificationDto::from).collect(),
    }))
}

/// GET /api/v1/notifications/unread_count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: Auth,
) -> ApiResult<Json<UnreadCountResponse>> {
    let unread = state
        .notifications
        .count_unread(auth.identity.tenant_id, auth.identity.user_id)
        .await?;

    Ok(Json(UnreadCountResponse { unread }))
}

/// POST /api/v1/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: Auth,
    Path(id): Path<u64>,
) -> ApiResult<StatusCode> {
    state
        .notifications
        .mark_read(auth.identity.tenant_id, auth.identity.user_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
