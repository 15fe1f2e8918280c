//! Key-value storage abstraction
//!
//! This module defines the `KeyValueStorage` trait that abstracts over the
//! flat string-to-string substrates a [`crate::Store`] persists into.
//! Implementations exist for:
//!
//! - **Memory**: In-memory storage for testing (`MemoryStorage`)
//! - **Bounded**: Quota-enforcing wrapper over any backend (`BoundedStorage`)
//! - **SQLite**: Native SQLite via rusqlite (separate crate, native only)
//! - **Web Storage**: Browser `localStorage` via web-sys (separate crate, WASM only)
//!
//! # Example
//!
//! ```rust
//! use kvsync_core::storage::{KeyValueStorage, MemoryStorage};
//!
//! let storage = MemoryStorage::new();
//! storage.set("Todos", "a,b").unwrap();
//! assert_eq!(storage.get("Todos").unwrap().as_deref(), Some("a,b"));
//! assert_eq!(storage.len().unwrap(), 1);
//! ```

mod bounded;
mod error;
mod memory;
mod traits;

pub use bounded::{BoundedStorage, StorageQuotas};
pub use error::{StorageError, StorageResult, QUOTA_EXCEEDED_ERR};
pub use memory::MemoryStorage;
pub use traits::KeyValueStorage;
