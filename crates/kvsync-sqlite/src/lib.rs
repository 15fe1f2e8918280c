//! SQLite key-value backend for kvsync stores
//!
//! This crate provides a persistent SQLite implementation of the kvsync-core
//! `KeyValueStorage` trait, giving native platforms (servers, desktop apps,
//! the `kvsync` CLI) the same flat string-to-string substrate browsers get
//! from `localStorage`.
//!
//! # Features
//!
//! - One `kv_entries` table; keys enumerate in insertion order
//! - Schema created by embedded migrations tracked in `schema_migrations`
//! - Supports in-memory databases for testing
//! - A full database (`SQLITE_FULL`) surfaces as a quota error
//!
//! # Example
//!
//! ```rust,no_run
//! use kvsync_core::{Record, Store};
//! use kvsync_sqlite::SqliteStorage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = SqliteStorage::open("todos.db")?;
//! let mut store = Store::new("Todos", storage)?;
//!
//! let mut todo = Record::from_value(serde_json::json!({ "title": "a" }))?;
//! store.create(&mut todo)?;
//! assert_eq!(store.find_all()?.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod migrate;
pub mod storage;

// Re-export main types
pub use error::{Result, SqliteError};
pub use storage::SqliteStorage;
