//! SQLite Key-Value Store
//!
//! Manages the SQLite connection and the single `kv` table.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::DomainResult;
use super::traits::KvStore;

/// Key-value store backed by a local SQLite file
#[derive(Clone)]
pub struct SqliteKvStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteKvStore {
    /// Open (or create) the database at `db_path` and run migrations
    pub fn open(db_path: &Path) -> DomainResult<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| crate::domain::DomainError::internal(format!("create {}: {}", parent.display(), e)))?;
            }
        }
        let conn = Connection::open(db_path)?;
        run_migrations(&conn)?;
        tracing::info!(path = %db_path.display(), "sqlite store opened");
        Ok(Self::from_connection(conn))
    }

    /// In-memory database, mostly for tests
    pub fn open_in_memory() -> DomainResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }
}

#[async_trait]
impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let conn = self.conn.lock().await;
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        )",
        (),
    )?;
    Ok(())
}
