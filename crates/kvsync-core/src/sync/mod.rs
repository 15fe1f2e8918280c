//! Sync dispatcher
//!
//! Translates the verbs a model layer issues (`read`, `create`, `update`,
//! `delete`) into calls on the [`crate::Store`] resolved from the model or
//! its owning collection, and settles the outcome through a completion
//! protocol: an already-settled future plus optional `success`, `error` and
//! `complete` callbacks for callback-style callers.
//!
//! Which transport handles a call is decided by an injected
//! [`SyncStrategy`]; [`SyncRouter`] sends calls to [`LocalSync`] unless the
//! caller asks for the default transport or no store can be resolved.
//!
//! # Example
//!
//! ```rust
//! use kvsync_core::{local_sync, MemoryStorage, Model, Record, Store, StoreSource, SyncOptions, Verb};
//! use serde_json::json;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let store = Store::new("Todos", MemoryStorage::new()).unwrap().into_shared();
//! let mut model = Model::new(Record::from_value(json!({ "title": "a" })).unwrap())
//!     .with_local_storage(StoreSource::Value(store));
//!
//! let saved = local_sync(Verb::Create, &mut model, SyncOptions::new()).await.unwrap();
//! assert_eq!(saved.into_value()["title"], "a");
//! # });
//! ```

mod dispatch;
mod model;
mod options;
mod strategy;
mod verb;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use dispatch::local_sync;
pub use model::{resolve_store, Collection, Model, StoreSource, Syncable};
pub use options::SyncOptions;
pub use strategy::{LocalSync, NoTransport, StoreSync, SyncRouter, SyncStrategy};
pub use verb::Verb;

/// Rejection message when a lookup finds nothing.
pub const RECORD_NOT_FOUND: &str = "Record Not Found";

/// Rejection message when a quota error hits an empty storage.
pub const PRIVATE_BROWSING_UNSUPPORTED: &str = "Private browsing is unsupported";

/// Value a successful sync resolves with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SyncResponse {
    /// A single record (find, create, update, delete)
    Record(Value),
    /// Every record of a collection (find all)
    Records(Vec<Value>),
}

impl SyncResponse {
    pub fn into_value(self) -> Value {
        match self {
            SyncResponse::Record(value) => value,
            SyncResponse::Records(values) => Value::Array(values),
        }
    }

    pub fn as_record(&self) -> Option<&Value> {
        match self {
            SyncResponse::Record(value) => Some(value),
            SyncResponse::Records(_) => None,
        }
    }

    pub fn as_records(&self) -> Option<&[Value]> {
        match self {
            SyncResponse::Record(_) => None,
            SyncResponse::Records(values) => Some(values),
        }
    }
}

/// Message a rejected sync settles with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyncError {
    message: String,
}

impl SyncError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(RECORD_NOT_FOUND)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of a sync call.
pub type SyncResult = Result<SyncResponse, SyncError>;

/// Already-settled future returned by every sync strategy.
pub type SyncFuture = std::future::Ready<SyncResult>;
