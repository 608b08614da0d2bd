use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Open a pool against the given SQLite URL, creating the file when absent.
pub async fn connect(database_url: &str, max_connections: u32) -> DbErrorResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| DbError::Initialization {
            message: format!("invalid database url: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Apply the embedded migrations.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
