//! Named record stores over a key-value substrate.
//!
//! A store named `Todos` persists its index under the key `Todos` and each
//! record under `Todos-<id>`. The in-memory index is loaded once at
//! construction and written back after every mutation that changes it.

mod index;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, StoreError};
use crate::id::generate_id;
use crate::record::{Record, RecordId};
use crate::serializer::{JsonSerializer, Serializer};
use crate::storage::KeyValueStorage;

pub use index::RecordIndex;

/// Store shared between a collection and its models.
pub type SharedStore = Rc<RefCell<Store>>;

/// Per-collection persistence unit: an id index plus one entry per record.
pub struct Store {
    name: String,
    serializer: Box<dyn Serializer>,
    storage: Box<dyn KeyValueStorage>,
    records: RecordIndex,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("name", &self.name)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Open the store `name` over `storage` with the JSON serializer.
    pub fn new(name: impl Into<String>, storage: impl KeyValueStorage + 'static) -> Result<Self> {
        Self::with_serializer(name, storage, JsonSerializer)
    }

    /// Open the store `name` with a custom serializer.
    ///
    /// Fails with `Unsupported` when the storage capability is unusable in
    /// this environment. Any name is accepted, including the empty one.
    pub fn with_serializer(
        name: impl Into<String>,
        storage: impl KeyValueStorage + 'static,
        serializer: impl Serializer + 'static,
    ) -> Result<Self> {
        let name = name.into();

        storage
            .probe()
            .map_err(|e| StoreError::Unsupported(e.to_string()))?;

        let records = RecordIndex::parse(storage.get(&name)?.as_deref());
        debug!("Opened store {} with {} records", name, records.len());

        Ok(Self {
            name,
            serializer: Box::new(serializer),
            storage: Box::new(storage),
            records,
        })
    }

    /// Wrap in a [`SharedStore`] handle.
    pub fn into_shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ids currently tracked, in index order.
    pub fn records(&self) -> &RecordIndex {
        &self.records
    }

    /// Re-read the index from storage, discarding the in-memory copy.
    pub fn reload(&mut self) -> Result<()> {
        self.records = RecordIndex::parse(self.storage.get(&self.name)?.as_deref());
        Ok(())
    }

    /// Persist `record`, assigning a generated id if it has none.
    ///
    /// The id is appended to the index without a duplicate check: records
    /// reaching `create` are assumed new. Use [`Store::update`] for records
    /// that may already be tracked.
    pub fn create(&mut self, record: &mut Record) -> Result<Option<Value>> {
        if record.needs_id() {
            record.set_id(RecordId::new(generate_id()));
        }
        let id = self.checked_id(record)?;

        self.write_item(&id, record)?;
        self.records.push(id.as_str());
        self.save()?;
        debug!("Created {} in {}", id, self.name);

        self.find(record)
    }

    /// Read back the stored copy of `record`.
    ///
    /// Absence (no id, no entry, or a stored `null`) is `Ok(None)`.
    pub fn find(&self, record: &Record) -> Result<Option<Value>> {
        match record.id() {
            Some(id) => self.read_item(id.as_str()),
            None => Ok(None),
        }
    }

    /// Every record in index order.
    ///
    /// Ids whose entries have vanished from storage are skipped.
    pub fn find_all(&self) -> Result<Vec<Value>> {
        let mut result = Vec::with_capacity(self.records.len());
        for id in self.records.iter() {
            match self.read_item(id)? {
                Some(value) => result.push(value),
                None => warn!("Index of {} references missing record {}", self.name, id),
            }
        }
        Ok(result)
    }

    /// Overwrite the stored copy of `record`, tracking its id if new.
    pub fn update(&mut self, record: &Record) -> Result<Option<Value>> {
        let id = self.checked_id(record)?;

        self.write_item(&id, record)?;
        if self.records.insert_unique(id.as_str()) {
            self.save()?;
        }
        debug!("Updated {} in {}", id, self.name);

        self.find(record)
    }

    /// Remove `record` from storage and the index, returning its projection.
    pub fn destroy(&mut self, record: &Record) -> Result<Value> {
        let id = record.id().ok_or(StoreError::MissingIdentifier)?;

        self.storage.remove(&self.item_name(id.as_str()))?;
        self.records.remove_all(id.as_str());
        self.save()?;
        debug!("Destroyed {} in {}", id, self.name);

        Ok(record.to_value())
    }

    /// Remove the index key and every `"<name>-"` entry.
    pub fn clear(&mut self) -> Result<()> {
        let prefix = format!("{}-", self.name);

        self.storage.remove(&self.name)?;
        for key in self.storage.keys()? {
            if key.starts_with(&prefix) {
                self.storage.remove(&key)?;
            }
        }
        self.records.clear();
        debug!("Cleared {}", self.name);

        Ok(())
    }

    /// Write the index to storage.
    pub fn save(&self) -> Result<()> {
        self.storage.set(&self.name, &self.records.serialize())?;
        Ok(())
    }

    /// Total entry count of the underlying storage, across all stores.
    pub fn storage_size(&self) -> Result<usize> {
        Ok(self.storage.len()?)
    }

    fn item_name(&self, id: &str) -> String {
        format!("{}-{}", self.name, id)
    }

    fn checked_id(&self, record: &Record) -> Result<RecordId> {
        let id = record.id().ok_or(StoreError::MissingIdentifier)?;
        if id.as_str().contains(RecordIndex::SEPARATOR) {
            return Err(StoreError::InvalidArgument(format!(
                "record id {:?} contains '{}'",
                id.as_str(),
                RecordIndex::SEPARATOR
            )));
        }
        Ok(id)
    }

    fn write_item(&self, id: &RecordId, record: &Record) -> Result<()> {
        let data = self.serializer.stringify(&record.to_value())?;
        self.storage.set(&self.item_name(id.as_str()), &data)?;
        Ok(())
    }

    fn read_item(&self, id: &str) -> Result<Option<Value>> {
        match self.storage.get(&self.item_name(id))? {
            Some(data) => match self.serializer.parse(&data)? {
                Value::Null => Ok(None),
                value => Ok(Some(value)),
            },
            None => Ok(None),
        }
    }
}
