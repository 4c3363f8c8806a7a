// SQLite connection pool and schema initialization

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::db::INIT_SCHEMA;

pub async fn establish_connection(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    // Create database if it doesn't exist
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    info!("Connected to {} (max connections: {})", config.database_url, config.db_max_connections);

    Ok(pool)
}

/// Single-connection in-memory database. Every pooled connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(INIT_SCHEMA).execute(pool).await?;
    Ok(())
}
