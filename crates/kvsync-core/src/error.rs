//! Store error types

use thiserror::Error;

use crate::storage::StorageError;

/// Errors raised by a [`crate::Store`].
///
/// Construction-time variants (`InvalidArgument`, `Unsupported`) are
/// configuration errors and leave no usable store behind. The rest surface
/// mid-operation and are turned into rejection messages by the sync
/// dispatcher.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A caller-supplied argument cannot be used (id with a comma, non-object record)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The environment offers no usable key-value storage
    #[error("environment does not support key-value storage: {0}")]
    Unsupported(String),

    /// Failure reported by the key-value substrate
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Serializer could not stringify or parse a record
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The record carries no identifier
    #[error("record has no identifier")]
    MissingIdentifier,
}

impl StoreError {
    /// Whether this failure is the substrate refusing a write because it is full.
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, StoreError::Storage(e) if e.is_quota_exceeded())
    }

    /// Legacy numeric error code, if the underlying failure carries one.
    pub fn code(&self) -> Option<u16> {
        match self {
            StoreError::Storage(e) => e.code(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
