use crate::tests::api::support::{test_server, token};

use http::StatusCode;
use serde_json::{Value, json};

fn workspace_body(short_name: &str) -> Value {
    json!({
        "name": "Engineering",
        "short_name": short_name,
        "description": "All things engineering",
    })
}

#[tokio::test]
async fn given_member_token_when_creating_workspace_then_owner_recorded() {
    let server = test_server().await;
    let member = token(42, 7, &["authenticated"]);

    let response = server
        .post("/api/v1/workspaces")
        .authorization_bearer(&member)
        .json(&workspace_body("eng"))
        .await;

    response.assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["workspace"]["short_name"], "eng");
    assert_eq!(body["workspace"]["user_id"], 7);
}

#[tokio::test]
async fn given_duplicate_short_name_when_creating_workspace_then_409() {
    let server = test_server().await;
    let member = token(42, 7, &["authenticated"]);
    server
        .post("/api/v1/workspaces")
        .authorization_bearer(&member)
        .json(&workspace_body("eng"))
        .await
        .assert_status(StatusCode::OK);

    let response = server
        .post("/api/v1/workspaces")
        .authorization_bearer(&member)
        .json(&workspace_body("eng"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn given_uppercase_short_name_when_creating_workspace_then_400_with_field() {
    let server = test_server().await;
    let member = token(42, 7, &["authenticated"]);

    let response = server
        .post("/api/v1/workspaces")
        .authorization_bearer(&member)
        .json(&workspace_body("Eng"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_ARGUMENT");
    assert_eq!(body["error"]["field"], "short_name");
}

#[tokio::test]
async fn given_workspace_in_other_tenant_when_listed_then_absent() {
    let server = test_server().await;
    let member = token(42, 7, &["authenticated"]);
    server
        .post("/api/v1/workspaces")
        .authorization_bearer(&member)
        .json(&workspace_body("eng"))
        .await
        .assert_status(StatusCode::OK);

    let outsider = token(43, 7, &["authenticated"]);
    let body: Value = server
        .get("/api/v1/workspaces")
        .authorization_bearer(&outsider)
        .await
        .json();

    assert_eq!(body["workspaces"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn given_updated_workspace_when_fetched_then_changes_visible() {
    let server = test_server().await;
    let member = token(42, 7, &["authenticated"]);
    let response = server
        .post("/api/v1/workspaces")
        .authorization_bearer(&member)
        .json(&workspace_body("eng"))
        .await;
    let id = response.json::<Value>()["workspace"]["id"].as_u64().unwrap();

    server
        .put(&format!("/api/v1/workspaces/{id}"))
        .authorization_bearer(&member)
        .json(&json!({
            "name": "Engineering Platform",
            "description": "",
            "status": "inactive",
        }))
        .await
        .assert_status(StatusCode::OK);

    let body: Value = server
        .get(&format!("/api/v1/workspaces/{id}"))
        .authorization_bearer(&member)
        .await
        .json();
    assert_eq!(body["workspace"]["name"], "Engineering Platform");
    assert_eq!(body["workspace"]["status"], "inactive");
}
