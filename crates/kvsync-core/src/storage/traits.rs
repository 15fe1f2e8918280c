//! Storage trait definitions

use crate::storage::error::StorageResult;

/// Flat string-to-string persistent storage bound to one execution context.
///
/// This trait mirrors the browser `Storage` interface and is designed to work
/// across platforms:
/// - Native: SQLite
/// - Browser: `localStorage` / `sessionStorage`
/// - Testing: In-memory
///
/// Methods take `&self`: implementations are handles onto a shared
/// substrate, and every clone of a handle observes the same entries.
pub trait KeyValueStorage {
    /// Read the value stored under `key`.
    ///
    /// Returns `None` if the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Returns `StorageError::QuotaExceeded` if the substrate is full.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Enumerate every key currently stored.
    fn keys(&self) -> StorageResult<Vec<String>>;

    /// Get the total number of entries.
    fn len(&self) -> StorageResult<usize> {
        Ok(self.keys()?.len())
    }

    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Check that the capability is usable in this environment.
    ///
    /// Must not write to the substrate.
    fn probe(&self) -> StorageResult<()> {
        Ok(())
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Box<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        (**self).keys()
    }

    fn len(&self) -> StorageResult<usize> {
        (**self).len()
    }

    fn probe(&self) -> StorageResult<()> {
        (**self).probe()
    }
}
