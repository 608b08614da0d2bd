#![allow(dead_code)] // shared across test binaries; not every binary uses every fixture

use wd_core::{Notification, User, UserStatus, Workspace, WorkspaceStatus};

use chrono::Utc;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
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

    pool
}

pub fn test_user(tenant_id: u64, username: &str) -> User {
    let now = Utc::now();
    User {
        id: 0,
        tenant_id,
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        username: username.to_string(),
        password: "hashed-password".to_string(),
        status: UserStatus::Active,
        roles: vec!["authenticated".to_string()],
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

pub fn test_workspace(tenant_id: u64, user_id: u64, short_name: &str) -> Workspace {
    let now = Utc::now();
    Workspace {
        id: 0,
        tenant_id,
        user_id,
        name: format!("Workspace {}", short_name),
        short_name: short_name.to_string(),
        description: String::new(),
        status: WorkspaceStatus::Active,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

pub fn test_notification(tenant_id: u64, user_id: u64, message: &str) -> Notification {
    Notification {
        id: 0,
        tenant_id,
        user_id,
        message: message.to_string(),
        created_at: Utc::now(),
        read_at: None,
    }
}
