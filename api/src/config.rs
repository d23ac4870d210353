// ABOUTME: Service configuration from defaults overlaid with SIGNTRACK_* environment variables
// ABOUTME: Also decides which record store backend the service runs on

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use signtrack_core::database::DatabaseError;
use signtrack_core::store::{MemoryRecordStore, RecordStore, SqliteRecordStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const ENV_PREFIX: &str = "SIGNTRACK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Persisted to the SQLite file at `database_path`
    Sqlite,
    /// Lost on restart, mostly useful for local experiments
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub storage: StorageKind,
}

impl ApiConfig {
    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    pub fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let default_database = Path::new(env!("CARGO_MANIFEST_DIR")).join("../database/signtrack.db");

        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000)?
            .set_default(
                "database_path",
                default_database.to_string_lossy().into_owned(),
            )?
            .set_default("storage", "sqlite")?
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Open the configured record store backend
    pub async fn open_store(&self) -> Result<Arc<dyn RecordStore>, DatabaseError> {
        match self.storage {
            StorageKind::Sqlite => {
                let store = SqliteRecordStore::open(&self.database_path).await?;
                Ok(Arc::new(store))
            }
            StorageKind::Memory => Ok(Arc::new(MemoryRecordStore::new())),
        }
    }
}
