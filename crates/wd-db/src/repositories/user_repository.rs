//! User repository. Every query is tenant-filtered; soft-deleted rows are
//! invisible to reads.

use crate::repositories::timestamp;
use crate::{DbError, Result as DbErrorResult};

use wd_core::{Pagination, User, UserStatus};

use std::panic::Location;
use std::str::FromStr;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    tenant_id: i64,
    first_name: String,
    last_name: String,
    username: String,
    password: String,
    status: String,
    roles: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl UserRow {
    fn into_model(self) -> DbErrorResult<User> {
        let roles: Vec<String> =
            serde_json::from_str(&self.roles).map_err(|e| DbError::Initialization {
                message: format!("invalid roles in user.roles: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let status = UserStatus::from_str(&self.status).map_err(|e| DbError::Initialization {
            message: format!("invalid status in user.status: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(User {
            id: self.id as u64,
            tenant_id: self.tenant_id as u64,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            password: self.password,
            status,
            roles,
            created_at: timestamp("user.created_at", self.created_at)?,
            updated_at: timestamp("user.updated_at", self.updated_at)?,
            deleted_at: self
                .deleted_at
                .map(|secs| timestamp("user.deleted_at", secs))
                .transpose()?,
        })
    }
}

const SELECT_COLUMNS: &str = "id, tenant_id, first_name, last_name, username, password, \
     status, roles, created_at, updated_at, deleted_at";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user and return the assigned id.
    pub async fn create(&self, user: &User) -> DbErrorResult<u64> {
        let roles = serde_json::to_string(&user.roles).map_err(|e| DbError::Initialization {
            message: format!("unable to encode roles: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    tenant_id, first_name, last_name, username, password,
                    status, roles, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.tenant_id as i64)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.password)
        .bind(user.status.as_str())
        .bind(&roles)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid() as u64)
    }

    pub async fn find_by_id(&self, tenant_id: u64, user_id: u64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM users \
             WHERE tenant_id = ? AND id = ? AND deleted_at IS NULL"
        ))
        .bind(tenant_id as i64)
        .bind(user_id as i64)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_model).transpose()
    }

    pub async fn find_by_username(
        &self,
        tenant_id: u64,
        username: &str,
    ) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM users \
             WHERE tenant_id = ? AND username = ? AND deleted_at IS NULL"
        ))
        .bind(tenant_id as i64)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_model).transpose()
    }

    pub async fn list(&self, tenant_id: u64, pagination: Pagination) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM users \
             WHERE tenant_id = ? AND deleted_at IS NULL \
             ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(tenant_id as i64)
        .bind(pagination.limit as i64)
        .bind(pagination.offset as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_model).collect()
    }

    /// Update mutable profile fields. Fails with the no-rows sentinel when
    /// the user does not exist in the tenant scope.
    pub async fn update(&self, user: &User) -> DbErrorResult<()> {
        let roles = serde_json::to_string(&user.roles).map_err(|e| DbError::Initialization {
            message: format!("unable to encode roles: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET first_name = ?, last_name = ?, status = ?, roles = ?, updated_at = ?
                WHERE tenant_id = ? AND id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.status.as_str())
        .bind(&roles)
        .bind(now)
        .bind(user.tenant_id as i64)
        .bind(user.id as i64)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NoRowsUpdated {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    pub async fn update_password(
        &self,
        tenant_id: u64,
        user_id: u64,
        password: &str,
    ) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE users SET password = ?, updated_at = ?
                WHERE tenant_id = ? AND id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(password)
        .bind(now)
        .bind(tenant_id as i64)
        .bind(user_id as i64)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NoRowsUpdated {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    pub async fn soft_delete(&self, tenant_id: u64, user_id: u64) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE users SET deleted_at = ?, status = 'deleted'
                WHERE tenant_id = ? AND id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(now)
        .bind(tenant_id as i64)
        .bind(user_id as i64)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NoRowsDeleted {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
