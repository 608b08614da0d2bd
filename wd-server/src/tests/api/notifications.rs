use crate::tests::api::support::{test_server, token};

use http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn given_admin_notify_when_recipient_lists_then_visible() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);
    server
        .post("/api/v1/notifications")
        .authorization_bearer(&admin)
        .json(&json!({"user_id": 7, "message": "hello"}))
        .await
        .assert_status(StatusCode::OK);

    let recipient = token(42, 7, &["authenticated"]);
    let body: Value = server
        .get("/api/v1/notifications")
        .authorization_bearer(&recipient)
        .await
        .json();

    assert_eq!(body["notifications"].as_array().unwrap().len(), 1);
    assert_eq!(body["notifications"][0]["message"], "hello");
}

#[tokio::test]
async fn given_non_admin_token_when_notifying_then_401() {
    let server = test_server().await;
    let member = token(42, 7, &["authenticated"]);

    let response = server
        .post("/api/v1/notifications")
        .authorization_bearer(&member)
        .json(&json!({"user_id": 8, "message": "hello"}))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn given_broadcast_when_any_tenant_user_lists_then_visible() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);
    server
        .post("/api/v1/notifications/broadcast")
        .authorization_bearer(&admin)
        .json(&json!({"message": "maintenance window"}))
        .await
        .assert_status(StatusCode::OK);

    let member = token(42, 7, &["authenticated"]);
    let body: Value = server
        .get("/api/v1/notifications")
        .authorization_bearer(&member)
        .await
        .json();
    assert_eq!(body["notifications"].as_array().unwrap().len(), 1);

    let outsider = token(43, 7, &["authenticated"]);
    let body: Value = server
        .get("/api/v1/notifications")
        .authorization_bearer(&outsider)
        .await
        .json();
    assert_eq!(body["notifications"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn given_mark_read_when_counted_then_unread_drops() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);
    let response = server
        .post("/api/v1/notifications")
        .authorization_bearer(&admin)
        .json(&json!({"user_id": 7, "message": "hello"}))
        .await;
    let id = response.json::<Value>()["notification"]["id"].as_u64().unwrap();

    let recipient = token(42, 7, &["authenticated"]);
    let body: Value = server
        .get("/api/v1/notifications/unread_count")
        .authorization_bearer(&recipient)
        .await
        .json();
    assert_eq!(body["unread"], 1);

    server
        .post(&format!("/api/v1/notifications/{id}/read"))
        .authorization_bearer(&recipient)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // The cached count was invalidated by the write.
    let body: Value = server
        .get("/api/v1/notifications/unread_count")
        .authorization_bearer(&recipient)
        .await
        .json();
    assert_eq!(body["unread"], 0);
}

#[tokio::test]
async fn given_broadcast_read_by_one_user_when_counted_then_other_user_still_unread() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);
    let response = server
        .post("/api/v1/notifications/broadcast")
        .authorization_bearer(&admin)
        .json(&json!({"message": "maintenance window"}))
        .await;
    let id = response.json::<Value>()["notification"]["id"].as_u64().unwrap();

    let first = token(42, 7, &["authenticated"]);
    server
        .post(&format!("/api/v1/notifications/{id}/read"))
        .authorization_bearer(&first)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let second = token(42, 8, &["authenticated"]);
    let body: Value = server
        .get("/api/v1/notifications/unread_count")
        .authorization_bearer(&second)
        .await
        .json();
    assert_eq!(body["unread"], 1);

    server
        .post(&format!("/api/v1/notifications/{id}/read"))
        .authorization_bearer(&second)
        .await
        .assert_status(StatusCode::NO_CONTENT);
    let body: Value = server
        .get("/api/v1/notifications/unread_count")
        .authorization_bearer(&second)
        .await
        .json();
    assert_eq!(body["unread"], 0);
}

#[tokio::test]
async fn given_empty_message_when_notifying_then_400() {
    let server = test_server().await;
    let admin = token(42, 1, &["admin"]);

    let response = server
        .post("/api/v1/notifications")
        .authorization_bearer(&admin)
        .json(&json!({"user_id": 7, "message": ""}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
