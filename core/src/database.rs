// ABOUTME: SQLite connection pool setup for the persisted record store
// ABOUTME: Creates the database file if needed and applies embedded migrations

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to create database directory: {0}")]
    CreateDir(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

pub struct Database {
    pub pool: SqlitePool,
    pub path: PathBuf,
}

impl Database {
    /// Open (or create) the database at `path` and run pending migrations
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::migrate!("../database/migrations").run(&pool).await?;
        tracing::debug!("Database ready at {}", path.display());

        Ok(Self { pool, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_new_creates_file_and_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/signtrack.db");

        let db = Database::new(&path).await.unwrap();
        assert!(path.exists());

        let (next_id,): (i64,) =
            sqlx::query_as("SELECT next_id FROM store_counters WHERE name = 'signature_requests'")
                .fetch_one(&db.pool)
                .await
                .unwrap();
        assert_eq!(next_id, 0);
    }

    #[tokio::test]
    async fn test_reopen_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signtrack.db");

        let first = Database::new(&path).await.unwrap();
        first.pool.close().await;

        let second = Database::new(&path).await.unwrap();
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM store_counters")
            .fetch_one(&second.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
