//! Workspace repository.

use crate::repositories::timestamp;
use crate::{DbError, Result as DbErrorResult};

use wd_core::{Pagination, Workspace, WorkspaceStatus};

use std::panic::Location;
use std::str::FromStr;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct WorkspaceRow {
    id: i64,
    tenant_id: i64,
    user_id: i64,
    name: String,
    short_name: String,
    description: String,
    status: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl WorkspaceRow {
    fn into_model(self) -> DbErrorResult<Workspace> {
        let status =
            WorkspaceStatus::from_str(&self.status).map_err(|e| DbError::Initialization {
                message: format!("invalid status in workspace.status: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Workspace {
            id: self.id as u64,
            tenant_id: self.tenant_id as u64,
            user_id: self.user_id as u64,
            name: self.name,
            short_name: self.short_name,
            description: self.description,
            status,
            created_at: timestamp("workspace.created_at", self.created_at)?,
            updated_at: timestamp("workspace.updated_at", self.updated_at)?,
            deleted_at: self
                .deleted_at
                .map(|secs| timestamp("workspace.deleted_at", secs))
                .transpose()?,
        })
    }
}

const SELECT_COLUMNS: &str = "id, tenant_id, user_id, name, short_name, description, \
     status, created_at, updated_at, deleted_at";

pub struct WorkspaceRepository {
    pool: SqlitePool,
}

impl WorkspaceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a workspace and return the assigned id.
    pub async fn create(&self, workspace: &Workspace) -> DbErrorResult<u64> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO workspaces (
                    tenant_id, user_id, name, short_name, description,
                    status, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(workspace.tenant_id as i64)
        .bind(workspace.user_id as i64)
        .bind(&workspace.name)
        .bind(&workspace.short_name)
        .bind(&workspace.description)
        .bind(workspace.status.as_str())
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid() as u64)
    }

    pub async fn find_by_id(
        &self,
        tenant_id: u64,
        workspace_id: u64,
    ) -> DbErrorResult<Option<Workspace>> {
        let row = sqlx::query_as::<_, WorkspaceRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM workspaces \
             WHERE tenant_id = ? AND id = ? AND deleted_at IS NULL"
        ))
        .bind(tenant_id as i64)
        .bind(workspace_id as i64)
        .fetch_optional(&self.pool)
        .await?;

        row.map(WorkspaceRow::into_model).transpose()
    }

    pub async fn find_by_short_name(
        &self,
        tenant_id: u64,
        short_name: &str,
    ) -> DbErrorResult<Option<Workspace>> {
        let row = sqlx::query_as::<_, WorkspaceRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM workspaces \
             WHERE tenant_id = ? AND short_name = ? AND deleted_at IS NULL"
        ))
        .bind(tenant_id as i64)
        .bind(short_name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(WorkspaceRow::into_model).transpose()
    }

    pub async fn list(
        &self,
        tenant_id: u64,
        pagination: Pagination,
    ) -> DbErrorResult<Vec<Workspace>> {
        let rows = sqlx::query_as::<_, WorkspaceRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM workspaces \
             WHERE tenant_id = ? AND deleted_at IS NULL \
             ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(tenant_id as i64)
        .bind(pagination.limit as i64)
        .bind(pagination.offset as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(WorkspaceRow::into_model).collect()
    }

    pub async fn update(&self, workspace: &Workspace) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE workspaces
                SET name = ?, short_name = ?, description = ?, status = ?, updated_at = ?
                WHERE tenant_id = ? AND id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&workspace.name)
        .bind(&workspace.short_name)
        .bind(&workspace.description)
        .bind(workspace.status.as_str())
        .bind(now)
        .bind(workspace.tenant_id as i64)
        .bind(workspace.id as i64)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NoRowsUpdated {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    pub async fn soft_delete(&self, tenant_id: u64, workspace_id: u64) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE workspaces SET deleted_at = ?, status = 'deleted'
                WHERE tenant_id = ? AND id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(now)
        .bind(tenant_id as i64)
        .bind(workspace_id as i64)
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
