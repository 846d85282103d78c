//! SQLite connection helpers

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::errors::SharedResult;

/// Open a pool on a file-backed database, creating the file if needed
pub async fn connect(database_url: &str, max_connections: u32) -> SharedResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    crate::app_info!("🗄️ Connected to {}", database_url);
    Ok(pool)
}

/// Single-connection in-memory pool. The connection is never recycled so
/// the database lives as long as the pool.
pub async fn connect_in_memory() -> SharedResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}
