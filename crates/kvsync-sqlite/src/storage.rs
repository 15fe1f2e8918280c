//! SQLite storage backend implementing the KeyValueStorage trait

use std::rc::Rc;

use kvsync_core::storage::{KeyValueStorage, StorageError, StorageResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::error::SqliteError;

/// SQLite-backed key-value storage.
///
/// Clones share one connection, so stores opened over clones of the same
/// handle observe each other's writes.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    conn: Rc<Connection>,
}

impl SqliteStorage {
    /// Create a new SQLite storage from a connection
    ///
    /// The connection should already have migrations applied.
    /// Use [`crate::migrate::migrate`] to initialize a fresh database.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Rc::new(conn),
        }
    }

    /// Create a new in-memory SQLite storage (for testing)
    pub fn in_memory() -> crate::error::Result<Self> {
        let conn = Connection::open_in_memory()?;
        crate::migrate::migrate(&conn)?;
        Ok(Self::new(conn))
    }

    /// Create a new file-backed SQLite storage
    pub fn open(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        crate::migrate::migrate(&conn)?;
        debug!("Opened SQLite storage at {}", path.display());
        Ok(Self::new(conn))
    }

    /// Cap the database size in pages; writes beyond it fail with a quota error.
    ///
    /// SQLite never lowers the cap below the current size. Returns the cap in effect.
    pub fn set_max_page_count(&self, pages: u32) -> crate::error::Result<u64> {
        let sql = format!("PRAGMA max_page_count = {}", pages);
        let effective = self.conn.query_row(&sql, [], |row| row.get::<_, i64>(0))?;
        Ok(effective as u64)
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn backend(err: rusqlite::Error) -> StorageError {
    SqliteError::from(err).into()
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(backend)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn
            .execute(
                "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![key, value],
            )
            .map_err(backend)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM kv_entries WHERE key = ?", [key])
            .map_err(backend)?;
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_entries ORDER BY rowid")
            .map_err(backend)?;

        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(backend)?
            .collect::<Result<Vec<String>, rusqlite::Error>>()
            .map_err(backend)?;

        Ok(keys)
    }

    fn len(&self) -> StorageResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM kv_entries", [], |row| row.get(0))
            .map_err(backend)?;
        Ok(count as usize)
    }

    fn probe(&self) -> StorageResult<()> {
        self.conn
            .prepare("SELECT 1 FROM kv_entries LIMIT 1")
            .map(|_| ())
            .map_err(|e| StorageError::Unsupported(format!("kv_entries unavailable: {}", e)))
    }
}
