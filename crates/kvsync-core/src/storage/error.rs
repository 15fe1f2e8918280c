//! Storage error types

use thiserror::Error;

/// Legacy DOM exception code for `QuotaExceededError`.
pub const QUOTA_EXCEEDED_ERR: u16 = 22;

/// Errors that can occur inside a key-value substrate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The storage capability is absent in this environment
    #[error("key-value storage not available: {0}")]
    Unsupported(String),

    /// The substrate refused a write because it is full
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Storage backend error (database, browser API, etc.)
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StorageError {
    /// Legacy numeric code, mirroring `DOMException.code`.
    pub fn code(&self) -> Option<u16> {
        match self {
            StorageError::QuotaExceeded(_) => Some(QUOTA_EXCEEDED_ERR),
            _ => None,
        }
    }

    pub fn is_quota_exceeded(&self) -> bool {
        self.code() == Some(QUOTA_EXCEEDED_ERR)
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
