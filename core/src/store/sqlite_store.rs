// ABOUTME: SQLite-backed record store, durable across process restarts
// ABOUTME: Keeps the id counter in its own table so ids are never reused

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::path::Path;
use tokio::sync::Mutex;

use super::{now_nanos, validate_new_request, RecordStore, StoreError};
use crate::database::{Database, DatabaseError};
use crate::types::SignatureRequest;

const COUNTER_NAME: &str = "signature_requests";

#[derive(FromRow)]
struct SignatureRequestRow {
    id: i64,
    name: String,
    link: String,
    notes: Option<String>,
    created_at: i64,
    signed: bool,
}

impl TryFrom<SignatureRequestRow> for SignatureRequest {
    type Error = StoreError;

    fn try_from(row: SignatureRequestRow) -> Result<Self, Self::Error> {
        let id = u64::try_from(row.id).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(SignatureRequest {
            id,
            name: row.name,
            link: row.link,
            created_at: row.created_at,
            notes: row.notes,
            signed: row.signed,
        })
    }
}

pub struct SqliteRecordStore {
    pool: SqlitePool,
    /// Serializes writers so the counter and the collection move together
    write_lock: Mutex<()>,
}

impl SqliteRecordStore {
    /// Wrap a pool whose schema has already been migrated
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Mutex::new(()),
        }
    }

    /// Open the database file at `path`, creating and migrating it if needed
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let database = Database::new(path).await?;
        Ok(Self::new(database.pool))
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn add_signature_request(
        &self,
        name: &str,
        notes: Option<&str>,
        link: &str,
    ) -> Result<u64, StoreError> {
        validate_new_request(name, link)?;
        let created_at = now_nanos()?;

        let _guard = self.write_lock.lock().await;
        let mut tx = self.pool.begin().await?;

        let (next_id,): (i64,) =
            sqlx::query_as("SELECT next_id FROM store_counters WHERE name = ?1")
                .bind(COUNTER_NAME)
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query(
            r#"
            INSERT INTO signature_requests (id, name, link, notes, created_at, signed)
            VALUES (?1, ?2, ?3, ?4, ?5, FALSE)
            "#,
        )
        .bind(next_id)
        .bind(name)
        .bind(link)
        .bind(notes)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE store_counters SET next_id = next_id + 1 WHERE name = ?1")
            .bind(COUNTER_NAME)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let id = u64::try_from(next_id).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        tracing::debug!(id, "Stored signature request");
        Ok(id)
    }

    async fn get_signature_requests(&self) -> Result<Vec<SignatureRequest>, StoreError> {
        let rows = sqlx::query_as::<_, SignatureRequestRow>(
            r#"
            SELECT id, name, link, notes, created_at, signed
            FROM signature_requests
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(SignatureRequest::try_from).collect()
    }

    async fn update_signature_status(&self, id: u64, signed: bool) -> Result<(), StoreError> {
        let db_id = i64::try_from(id).map_err(|_| StoreError::NotFound(id))?;

        let _guard = self.write_lock.lock().await;
        let result = sqlx::query("UPDATE signature_requests SET signed = ?1 WHERE id = ?2")
            .bind(signed)
            .bind(db_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
