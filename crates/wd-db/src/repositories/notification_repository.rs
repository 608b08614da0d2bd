//! Notification repository.
//!
//! A notification addressed to user 0 is a tenant-wide broadcast and is
//! visible to every user in the tenant. Read marks live in their own table
//! keyed by recipient, so one user reading a broadcast leaves it unread
//! for everyone else.

use crate::repositories::timestamp;
use crate::{DbError, Result as DbErrorResult};

use wd_core::{Notification, Pagination};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::SqlitePool;

#[derive(sqlx::FromRow)]
struct NotificationRow {
    id: i64,
    tenant_id: i64,
    user_id: i64,
    message: String,
    created_at: i64,
    read_at: Option<i64>,
}

impl NotificationRow {
    fn into_model(self) -> DbErrorResult<Notification> {
        Ok(Notification {
            id: self.id as u64,
            tenant_id: self.tenant_id as u64,
            user_id: self.user_id as u64,
            message: self.message,
            created_at: timestamp("notification.created_at", self.created_at)?,
            read_at: self
                .read_at
                .map(|secs| timestamp("notification.read_at", secs))
                .transpose()?,
        })
    }
}

pub struct NotificationRepository {
    pool: SqlitePool,
}

impl NotificationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a notification and return the assigned id.
    pub async fn create(&self, notification: &Notification) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
                INSERT INTO notifications (tenant_id, user_id, message, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(notification.tenant_id as i64)
        .bind(notification.user_id as i64)
        .bind(&notification.message)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid() as u64)
    }

    /// Notifications visible to a user: their own plus tenant broadcasts,
    /// newest first. `read_at` reflects the requesting user's own mark.
    pub async fn list(
        &self,
        tenant_id: u64,
        user_id: u64,
        pagination: Pagination,
    ) -> DbErrorResult<Vec<Notification>> {
        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
                SELECT n.id, n.tenant_id, n.user_id, n.message, n.created_at, r.read_at
                FROM notifications n
                LEFT JOIN notification_reads r
                  ON r.tenant_id = n.tenant_id AND r.notification_id = n.id AND r.user_id = ?
                WHERE n.tenant_id = ? AND (n.user_id = ? OR n.user_id = 0)
                ORDER BY n.id DESC LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id as i64)
        .bind(tenant_id as i64)
        .bind(user_id as i64)
        .bind(pagination.limit as i64)
        .bind(pagination.offset as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(NotificationRow::into_model).collect()
    }

    pub async fn count_unread(&self, tenant_id: u64, user_id: u64) -> DbErrorResult<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*) FROM notifications n
                LEFT JOIN notification_reads r
                  ON r.tenant_id = n.tenant_id AND r.notification_id = n.id AND r.user_id = ?
                WHERE n.tenant_id = ? AND (n.user_id = ? OR n.user_id = 0)
                  AND r.read_at IS NULL
            "#,
        )
        .bind(user_id as i64)
        .bind(tenant_id as i64)
        .bind(user_id as i64)
        .fetch_one(&self.pool)
        .await?;

        Ok(count as u64)
    }

    /// Record one user's read mark. The insert only matches notifications
    /// the user can see, and the primary key makes a second mark a no-op,
    /// so zero affected rows covers missing, invisible, and already read.
    pub async fn mark_read(
        &self,
        tenant_id: u64,
        user_id: u64,
        notification_id: u64,
    ) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                INSERT OR IGNORE INTO notification_reads
                    (tenant_id, notification_id, user_id, read_at)
                SELECT tenant_id, id, ?, ?
                FROM notifications
                WHERE tenant_id = ? AND id = ? AND (user_id = ? OR user_id = 0)
            "#,
        )
        .bind(user_id as i64)
        .bind(Utc::now().timestamp())
        .bind(tenant_id as i64)
        .bind(notification_id as i64)
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
}
