//! `KeyValueStorage` over the browser's `localStorage` / `sessionStorage`

use kvsync_core::storage::{KeyValueStorage, StorageResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Storage;

use crate::error::{Result, WebStorageError};

/// Which Web Storage area a handle is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageArea {
    Local,
    Session,
}

impl StorageArea {
    /// Property name on the global object.
    pub fn property(&self) -> &'static str {
        match self {
            StorageArea::Local => "localStorage",
            StorageArea::Session => "sessionStorage",
        }
    }
}

/// A handle to one of the browser's Web Storage areas.
///
/// Handles are cheap to clone and all clones address the same area.
#[derive(Debug, Clone)]
pub struct WebStorage {
    area: StorageArea,
    storage: Storage,
}

impl WebStorage {
    /// Bind to `localStorage`.
    pub fn local() -> Result<Self> {
        Self::open(StorageArea::Local)
    }

    /// Bind to `sessionStorage`.
    pub fn session() -> Result<Self> {
        Self::open(StorageArea::Session)
    }

    /// Resolve `area` on the global object.
    ///
    /// Reading the property itself throws in some browsers when storage is
    /// disabled, so every failure here is reported as unavailability.
    pub fn open(area: StorageArea) -> Result<Self> {
        let global = js_sys::global();
        let name = area.property();

        let value: JsValue = js_sys::Reflect::get(&global, &name.into())
            .map_err(|_| WebStorageError::NotAvailable(format!("access to {} denied", name)))?;

        if value.is_undefined() || value.is_null() {
            return Err(WebStorageError::NotAvailable(format!(
                "{} is null/undefined",
                name
            )));
        }

        let storage = value
            .dyn_into::<Storage>()
            .map_err(|_| WebStorageError::NotAvailable(format!("{} is not a Storage", name)))?;

        tracing::debug!("Bound to {}", name);
        Ok(Self { area, storage })
    }

    pub fn area(&self) -> StorageArea {
        self.area
    }

    /// Wrap an existing `Storage` object.
    pub fn from_storage(area: StorageArea, storage: Storage) -> Self {
        Self { area, storage }
    }
}

impl KeyValueStorage for WebStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| WebStorageError::from(e).into())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| WebStorageError::from(e).into())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| WebStorageError::from(e).into())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let len = self.storage.length().map_err(WebStorageError::from)?;
        let mut keys = Vec::with_capacity(len as usize);
        for i in 0..len {
            if let Some(key) = self.storage.key(i).map_err(WebStorageError::from)? {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn len(&self) -> StorageResult<usize> {
        let len = self.storage.length().map_err(WebStorageError::from)?;
        Ok(len as usize)
    }

    fn probe(&self) -> StorageResult<()> {
        self.storage
            .length()
            .map(|_| ())
            .map_err(|e| WebStorageError::NotAvailable(format!("{:?}", e)).into())
    }
}
