//! Error types for SQLite storage backend

use kvsync_core::storage::StorageError;
use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type for SQLite backend operations
pub type Result<T> = std::result::Result<T, SqliteError>;

/// Errors that can occur during SQLite storage operations
#[derive(Debug, Error)]
pub enum SqliteError {
    /// Database connection or query error
    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),
}

impl SqliteError {
    /// Whether SQLite refused the write because the database is full.
    pub fn is_full(&self) -> bool {
        match self {
            SqliteError::Database(rusqlite::Error::SqliteFailure(e, _)) => {
                e.code == ErrorCode::DiskFull
            }
            _ => false,
        }
    }
}

/// Convert SqliteError to StorageError for the storage trait
impl From<SqliteError> for StorageError {
    fn from(err: SqliteError) -> Self {
        if err.is_full() {
            return StorageError::QuotaExceeded(err.to_string());
        }
        match err {
            SqliteError::Database(e) => StorageError::Backend(format!("SQLite: {}", e)),
            SqliteError::Migration(msg) => StorageError::Backend(format!("Migration: {}", msg)),
        }
    }
}
