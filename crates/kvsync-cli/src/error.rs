//! CLI error type

use kvsync_core::{StoreError, SyncError};
use kvsync_sqlite::SqliteError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Sqlite(#[from] SqliteError),

    /// A sync call was rejected; carries the rejection message verbatim
    #[error("{0}")]
    Sync(#[from] SyncError),

    #[error("invalid JSON argument: {0}")]
    Json(#[from] serde_json::Error),
}
