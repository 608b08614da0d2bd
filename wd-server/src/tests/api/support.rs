//! Shared setup for API tests: an in-memory server and token minting.

use crate::build_router;
use crate::state::AppState;

use wd_auth::JwtValidator;

use axum_test::TestServer;
use jsonwebtoken::{EncodingKey, Header};
use serde_json::json;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_SECRET: &[u8] = b"api-test-secret";

pub async fn test_server() -> TestServer {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    wd_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let state = AppState::new(
        pool,
        JwtValidator::with_hs256(TEST_SECRET),
        4 * 1024 * 1024,
    );

    TestServer::new(build_router(state)).expect("Failed to start test server")
}

pub fn token(tenant_id: u64, user_id: u64, roles: &[&str]) -> String {
    let now = chrono::Utc::now().timestamp();
    mint(tenant_id, user_id, roles, now + 3600)
}

pub fn expired_token(tenant_id: u64, user_id: u64, roles: &[&str]) -> String {
    let now = chrono::Utc::now().timestamp();
    mint(tenant_id, user_id, roles, now - 3600)
}

fn mint(tenant_id: u64, user_id: u64, roles: &[&str], exp: i64) -> String {
    let claims = json!({
        "id": user_id,
        "tenantID": tenant_id,
        "firstName": "Test",
        "lastName": "User",
        "username": "tester",
        "roles": roles,
        "exp": exp,
        "iat": chrono::Utc::now().timestamp(),
    });

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to encode test token")
}

pub fn create_user_body(username: &str) -> serde_json::Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "username": username,
        "password": "Str0ngPass",
        "roles": ["authenticated"],
    })
}
