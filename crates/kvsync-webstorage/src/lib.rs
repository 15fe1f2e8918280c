//! Web Storage backend for kvsync stores (browser WASM)
//!
//! Binds the kvsync-core `KeyValueStorage` trait to the browser's
//! `localStorage` and `sessionStorage` areas. The Storage API is synchronous,
//! so every store operation completes before the sync dispatcher returns.
//!
//! Quota failures (`QuotaExceededError`, legacy code 22, or Firefox's
//! `NS_ERROR_DOM_QUOTA_REACHED`) surface as `StorageError::QuotaExceeded`.
//! A browser in private mode that reports an empty store and refuses writes
//! therefore reaches callers as "Private browsing is unsupported".
//!
//! # Example
//!
//! ```rust,ignore
//! use kvsync_core::{local_sync, Model, Record, Store, SyncOptions, Verb};
//! use kvsync_webstorage::WebStorage;
//!
//! let store = Store::new("Todos", WebStorage::local()?)?.into_shared();
//! let mut todo = Model::new(Record::new()).with_local_storage(store);
//! let created = local_sync(Verb::Create, &mut todo, SyncOptions::new()).await?;
//! ```

pub mod error;
pub mod storage;

pub use error::{Result, WebStorageError};
pub use storage::{StorageArea, WebStorage};
