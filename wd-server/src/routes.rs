use crate::api::notifications::notifications::{
    broadcast, list_notifications, mark_read, notify, unread_count,
};
use crate::api::users::users::{
    create_user, delete_user, get_user, list_users, update_password, update_user,
};
use crate::api::workspaces::workspaces::{
    create_workspace, delete_workspace, get_workspace, list_workspaces, update_workspace,
};
use crate::state::AppState;
use crate::{api, health};

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Every /api/v1 route sits behind the bearer-token middleware.
    let api = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/{id}/password", put(update_password))
        .route(
            "/workspaces",
            get(list_workspaces).post(create_workspace),
        )
        .route(
            "/workspaces/{id}",
            get(get_workspace).put(update_workspace).delete(delete_workspace),
        )
        .route("/notifications", get(list_notifications).post(notify))
        .route("/notifications/broadcast", post(broadcast))
        .route("/notifications/unread_count", get(unread_count))
        .route("/notifications/{id}/read", post(mark_read))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth::authenticate,
        ));

    Router::new()
        // Health check endpoints (no token required)
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api)
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
