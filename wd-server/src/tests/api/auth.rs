use crate::tests::api::support::{expired_token, test_server, token};

use http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn given_no_token_when_listing_users_then_401_with_code() {
    let server = test_server().await;

    let response = server.get("/api/v1/users").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn given_expired_token_when_listing_users_then_401() {
    let server = test_server().await;
    let token = expired_token(42, 7, &["authenticated"]);

    let response = server
        .get("/api/v1/users")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_wrong_scheme_when_listing_users_then_401() {
    let server = test_server().await;

    let response = server
        .get("/api/v1/users")
        .add_header("Authorization", "Basic dXNlcjpwYXNz")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_zero_tenant_token_when_listing_users_then_401() {
    let server = test_server().await;
    let token = token(0, 7, &["authenticated"]);

    let response = server
        .get("/api/v1/users")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_garbage_token_when_listing_users_then_401() {
    let server = test_server().await;

    let response = server
        .get("/api/v1/users")
        .authorization_bearer("not-a-jwt")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_no_token_when_checking_health_then_200() {
    let server = test_server().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}
