use crate::tests::api::support::{create_user_body, test_server, token};

use http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn given_admin_token_when_creating_user_then_user_returned_without_password() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);

    let response = server
        .post("/api/v1/users")
        .authorization_bearer(&admin)
        .json(&create_user_body("ada"))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["user"]["username"], "ada");
    assert!(body["user"]["id"].as_u64().unwrap() > 0);
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn given_non_admin_token_when_creating_user_then_401() {
    let server = test_server().await;
    let member = token(42, 7, &["authenticated"]);

    let response = server
        .post("/api/v1/users")
        .authorization_bearer(&member)
        .json(&create_user_body("ada"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_duplicate_username_when_creating_user_then_409() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);
    server
        .post("/api/v1/users")
        .authorization_bearer(&admin)
        .json(&create_user_body("ada"))
        .await
        .assert_status(StatusCode::OK);

    let response = server
        .post("/api/v1/users")
        .authorization_bearer(&admin)
        .json(&create_user_body("ada"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn given_weak_password_when_creating_user_then_400() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);
    let mut body = create_user_body("ada");
    body["password"] = json!("short");

    let response = server
        .post("/api/v1/users")
        .authorization_bearer(&admin)
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn given_missing_user_when_fetched_then_404() {
    let server = test_server().await;
    let member = token(42, 7, &["authenticated"]);

    let response = server
        .get("/api/v1/users/999")
        .authorization_bearer(&member)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn given_user_in_other_tenant_when_fetched_then_404() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);
    let response = server
        .post("/api/v1/users")
        .authorization_bearer(&admin)
        .json(&create_user_body("ada"))
        .await;
    let id = response.json::<Value>()["user"]["id"].as_u64().unwrap();

    let outsider = token(43, 1, &["admin"]);
    let response = server
        .get(&format!("/api/v1/users/{id}"))
        .authorization_bearer(&outsider)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_own_id_when_changing_password_then_204() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);
    let response = server
        .post("/api/v1/users")
        .authorization_bearer(&admin)
        .json(&create_user_body("ada"))
        .await;
    let id = response.json::<Value>()["user"]["id"].as_u64().unwrap();

    let own = token(42, id, &["authenticated"]);
    let response = server
        .put(&format!("/api/v1/users/{id}/password"))
        .authorization_bearer(&own)
        .json(&json!({"password": "N3wStr0ngPass"}))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn given_other_users_id_when_changing_password_then_401() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);
    let response = server
        .post("/api/v1/users")
        .authorization_bearer(&admin)
        .json(&create_user_body("ada"))
        .await;
    let id = response.json::<Value>()["user"]["id"].as_u64().unwrap();

    let other = token(42, id + 1, &["authenticated"]);
    let response = server
        .put(&format!("/api/v1/users/{id}/password"))
        .authorization_bearer(&other)
        .json(&json!({"password": "N3wStr0ngPass"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_deleted_user_when_listed_then_absent() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);
    let response = server
        .post("/api/v1/users")
        .authorization_bearer(&admin)
        .json(&create_user_body("ada"))
        .await;
    let id = response.json::<Value>()["user"]["id"].as_u64().unwrap();

    server
        .delete(&format!("/api/v1/users/{id}"))
        .authorization_bearer(&admin)
        .await
        .assert_status(StatusCode::OK);

    let body: Value = server
        .get("/api/v1/users")
        .authorization_bearer(&admin)
        .await
        .json();
    assert_eq!(body["users"].as_array().unwrap().len(), 0);
}
