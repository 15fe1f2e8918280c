//! kvsync core
//!
//! Persists model records into a flat key-value substrate (browser
//! `localStorage`, SQLite, memory) and exposes the four sync verbs a model
//! layer issues: read, create, update and delete.
//!
//! Each named [`Store`] owns a record index, persisted as a comma-joined list
//! of ids under the store's name, plus one entry per record at
//! `"<name>-<id>"`. The [`sync`] module translates verbs into store calls and
//! settles them through a future-plus-callbacks completion protocol.
//!
//! # Features
//!
//! - `wasm` - WASM-compatible build (routes randomness through the JS crypto API)
//!
//! # Example
//!
//! ```rust
//! use kvsync_core::{MemoryStorage, Record, Store};
//! use serde_json::json;
//!
//! let storage = MemoryStorage::new();
//! let mut store = Store::new("Todos", storage.clone()).unwrap();
//!
//! let mut todo = Record::from_value(json!({ "title": "a" })).unwrap();
//! let saved = store.create(&mut todo).unwrap().unwrap();
//! assert_eq!(saved["title"], "a");
//!
//! // A second store over the same substrate sees the persisted index.
//! let other = Store::new("Todos", storage).unwrap();
//! assert_eq!(other.find_all().unwrap().len(), 1);
//! ```

pub mod error;
pub mod id;
pub mod record;
pub mod serializer;
pub mod storage;
pub mod store;
pub mod sync;

// Re-export main types at crate root
pub use error::{Result, StoreError};
pub use id::{generate_id, is_generated_id};
pub use record::{Record, RecordId, DEFAULT_ID_ATTRIBUTE};
pub use serializer::{JsonSerializer, Serializer};
pub use storage::{
    BoundedStorage, KeyValueStorage, MemoryStorage, StorageError, StorageQuotas,
};
pub use store::{RecordIndex, SharedStore, Store};
pub use sync::{
    local_sync, resolve_store, Collection, LocalSync, Model, NoTransport, StoreSource, StoreSync,
    SyncError, SyncFuture, SyncOptions, SyncResponse, SyncResult, SyncRouter, SyncStrategy,
    Syncable, Verb,
};
