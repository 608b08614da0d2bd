use crate::ApiError;

use wd_core::Outcome;
use wd_db::DbError;
use wd_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_error_when_rendered_then_404_with_code() {
    let error = ApiError::from(ServiceError::NotFound {
        entity: "user",
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    let error = ApiError::from(ServiceError::Validation {
        field: "username",
        message: "must not be empty".into(),
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "INVALID_ARGUMENT");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn given_conflict_error_when_rendered_then_409() {
    let error = ApiError::from(ServiceError::AlreadyExists {
        entity: "workspace",
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_cause_not_exposed() {
    let error = ApiError::from(ServiceError::Db {
        source: DbError::Migration {
            message: "secret table layout detail".into(),
            location: here(),
        },
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL");
    assert_eq!(json["error"]["message"], "internal error");
}

#[tokio::test]
async fn given_triple_wrapped_not_found_when_rendered_then_404() {
    // A storage sentinel keeps its classification through any number of
    // context layers.
    let inner = ServiceError::Db {
        source: DbError::NoRowsUpdated { location: here() },
    };
    let wrapped = ServiceError::context(
        "unable to update user",
        ServiceError::context("request failed", inner),
    );
    let error = ApiError::from(wrapped);

    assert_eq!(error.outcome(), Outcome::NotFound);
    let (status, json) = body_json(error).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn given_permission_denied_when_rendered_then_401() {
    let error = ApiError::from(wd_auth::AuthError::PermissionDenied {
        authorized_roles: vec!["admin".to_string()],
        location: here(),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
}
