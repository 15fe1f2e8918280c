//! Bounded storage wrapper enforcing quota limits
//!
//! Provides a wrapper around any `KeyValueStorage` that enforces quotas the
//! way browsers cap `localStorage` per origin:
//! - Maximum number of entries
//! - Maximum total size (UTF-8 bytes of every key plus its value)
//!
//! Default quotas match the common browser budget: unlimited entries, 5 MiB.

use tracing::warn;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::traits::KeyValueStorage;

/// Storage quotas configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageQuotas {
    /// Maximum number of entries
    pub max_entries: usize,
    /// Maximum total size in bytes
    pub max_bytes: usize,
}

impl Default for StorageQuotas {
    fn default() -> Self {
        Self {
            max_entries: usize::MAX,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

impl StorageQuotas {
    /// Create quotas with custom limits
    pub fn new(max_entries: usize, max_bytes: usize) -> Self {
        Self {
            max_entries,
            max_bytes,
        }
    }

    /// Standard browser quotas (unlimited entries, 5 MiB)
    pub fn standard() -> Self {
        Self::default()
    }

    /// Unlimited quotas (for testing)
    pub fn unlimited() -> Self {
        Self {
            max_entries: usize::MAX,
            max_bytes: usize::MAX,
        }
    }

    /// Zero-byte quota of private browsing windows that refuse every write
    pub fn private_mode() -> Self {
        Self {
            max_entries: 0,
            max_bytes: 0,
        }
    }
}

/// Bounded storage wrapper enforcing quotas
#[derive(Debug, Clone)]
pub struct BoundedStorage<S> {
    inner: S,
    quotas: StorageQuotas,
}

impl<S: KeyValueStorage> BoundedStorage<S> {
    /// Create a new bounded storage with default quotas
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            quotas: StorageQuotas::default(),
        }
    }

    /// Create a bounded storage with custom quotas
    pub fn with_quotas(inner: S, quotas: StorageQuotas) -> Self {
        Self { inner, quotas }
    }

    /// Get a reference to the quotas
    pub fn quotas(&self) -> &StorageQuotas {
        &self.quotas
    }

    /// Get a reference to the underlying storage
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Total bytes currently used by keys and values.
    pub fn used_bytes(&self) -> StorageResult<usize> {
        let mut used = 0;
        for key in self.inner.keys()? {
            let value_len = self.inner.get(&key)?.map(|v| v.len()).unwrap_or(0);
            used += key.len() + value_len;
        }
        Ok(used)
    }

    /// Check if writing `value` under `key` would exceed quotas
    ///
    /// A limit of `usize::MAX` is never checked, so unlimited quotas cost no
    /// reads at all and an entry-only quota never scans values.
    fn check_quotas(&self, key: &str, value: &str) -> StorageResult<()> {
        let limits_entries = self.quotas.max_entries != usize::MAX;
        let limits_bytes = self.quotas.max_bytes != usize::MAX;
        if !limits_entries && !limits_bytes {
            return Ok(());
        }

        let existing = self.inner.get(key)?;

        if limits_entries && existing.is_none() {
            let entries = self.inner.len()?;
            if entries >= self.quotas.max_entries {
                return Err(StorageError::QuotaExceeded(format!(
                    "entries: {} >= {}",
                    entries, self.quotas.max_entries
                )));
            }
        }

        if limits_bytes {
            let released = existing.map(|v| key.len() + v.len()).unwrap_or(0);
            let projected = self.used_bytes()? - released + key.len() + value.len();
            if projected > self.quotas.max_bytes {
                return Err(StorageError::QuotaExceeded(format!(
                    "bytes: {} > {}",
                    projected, self.quotas.max_bytes
                )));
            }
        }

        Ok(())
    }
}

impl<S: KeyValueStorage> KeyValueStorage for BoundedStorage<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Err(e) = self.check_quotas(key, value) {
            warn!("Refused write to {}: {}", key, e);
            return Err(e);
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.inner.remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        self.inner.keys()
    }

    fn len(&self) -> StorageResult<usize> {
        self.inner.len()
    }

    fn probe(&self) -> StorageResult<()> {
        self.inner.probe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Memory storage that counts reads of single values.
    #[derive(Clone, Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        gets: Rc<Cell<usize>>,
    }

    impl KeyValueStorage for CountingStorage {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.gets.set(self.gets.get() + 1);
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> StorageResult<()> {
            self.inner.remove(key)
        }

        fn keys(&self) -> StorageResult<Vec<String>> {
            self.inner.keys()
        }
    }

    fn counting(
        quotas: StorageQuotas,
        entries: usize,
    ) -> (BoundedStorage<CountingStorage>, Rc<Cell<usize>>) {
        let backend = CountingStorage::default();
        for i in 0..entries {
            backend.inner.set(&format!("k{}", i), "v").unwrap();
        }
        let gets = backend.gets.clone();
        (BoundedStorage::with_quotas(backend, quotas), gets)
    }

    #[test]
    fn test_unlimited_quotas_skip_reads() {
        let (storage, gets) = counting(StorageQuotas::unlimited(), 2000);

        storage.set("k1", "updated").unwrap();
        storage.set("new", "v").unwrap();

        assert_eq!(gets.get(), 0);
        assert_eq!(storage.len().unwrap(), 2001);
    }

    #[test]
    fn test_entry_quota_does_not_scan_values() {
        let (storage, gets) = counting(StorageQuotas::new(5000, usize::MAX), 2000);

        storage.set("new", "v").unwrap();

        // Only the existing-entry lookup for the written key
        assert_eq!(gets.get(), 1);
    }

    #[test]
    fn test_entry_quota() {
        let storage = BoundedStorage::with_quotas(MemoryStorage::new(), StorageQuotas::new(2, 1024));

        storage.set("a", "1").unwrap();
        storage.set("b", "2").unwrap();
        let result = storage.set("c", "3");
        assert!(matches!(result, Err(StorageError::QuotaExceeded(_))));

        // Overwriting an existing key does not count as a new entry
        storage.set("a", "11").unwrap();
        assert_eq!(storage.len().unwrap(), 2);
    }

    #[test]
    fn test_byte_quota() {
        let storage = BoundedStorage::with_quotas(MemoryStorage::new(), StorageQuotas::new(10, 8));

        storage.set("k", "1234567").unwrap();
        assert_eq!(storage.used_bytes().unwrap(), 8);

        let err = storage.set("j", "x").unwrap_err();
        assert!(err.is_quota_exceeded());

        // Replacing a value reuses its bytes
        storage.set("k", "abcdefg").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("abcdefg"));
    }

    #[test]
    fn test_refused_write_leaves_storage_unchanged() {
        let inner = MemoryStorage::new();
        let storage = BoundedStorage::with_quotas(inner.clone(), StorageQuotas::new(10, 4));

        storage.set("k", "v").unwrap();
        assert!(storage.set("k", "too long").is_err());
        assert_eq!(inner.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_private_mode_refuses_everything() {
        let storage = BoundedStorage::with_quotas(MemoryStorage::new(), StorageQuotas::private_mode());

        let err = storage.set("Todos", "").unwrap_err();
        assert_eq!(err.code(), Some(22));
        assert!(storage.is_empty().unwrap());
    }

    #[test]
    fn test_unlimited_quotas() {
        let storage = BoundedStorage::with_quotas(MemoryStorage::new(), StorageQuotas::unlimited());
        for i in 0..100 {
            storage.set(&format!("k{}", i), &"x".repeat(100)).unwrap();
        }
        assert_eq!(storage.len().unwrap(), 100);
    }
}
