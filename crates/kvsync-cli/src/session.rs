//! One store opened for the duration of a CLI invocation.

use std::rc::Rc;

use kvsync_core::storage::StorageResult;
use kvsync_core::{
    BoundedStorage, Collection, KeyValueStorage, MemoryStorage, Model, Record, SharedStore,
    StorageQuotas, Store, StoreError, SyncOptions, SyncRouter, SyncStrategy, Syncable, Verb,
};
use kvsync_sqlite::SqliteStorage;
use serde_json::{json, Value};
use tracing::debug;

use crate::args::Command;
use crate::config::{Backend, CliConfig};
use crate::error::Result;

/// The substrate selected on the command line.
#[derive(Debug, Clone)]
pub enum Substrate {
    Sqlite(SqliteStorage),
    Memory(MemoryStorage),
    Bounded(Box<BoundedStorage<Substrate>>),
}

impl Substrate {
    /// Open `config.backend`, behind a quota wrapper only when limits are set.
    pub fn open(config: &CliConfig) -> Result<Self> {
        let substrate = match &config.backend {
            Backend::Sqlite(path) => Substrate::Sqlite(SqliteStorage::open(path)?),
            Backend::Memory => Substrate::Memory(MemoryStorage::new()),
        };
        Ok(match config.quotas {
            Some(quotas) => {
                Substrate::Bounded(Box::new(BoundedStorage::with_quotas(substrate, quotas)))
            }
            None => substrate,
        })
    }

    pub fn quotas(&self) -> Option<&StorageQuotas> {
        match self {
            Substrate::Bounded(bounded) => Some(bounded.quotas()),
            _ => None,
        }
    }

    fn as_dyn(&self) -> &dyn KeyValueStorage {
        match self {
            Substrate::Sqlite(s) => s,
            Substrate::Memory(s) => s,
            Substrate::Bounded(s) => &**s,
        }
    }
}

impl KeyValueStorage for Substrate {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.as_dyn().get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.as_dyn().set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.as_dyn().remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        self.as_dyn().keys()
    }

    fn len(&self) -> StorageResult<usize> {
        self.as_dyn().len()
    }

    fn probe(&self) -> StorageResult<()> {
        self.as_dyn().probe()
    }
}

/// A store plus the collection and router used to reach it.
pub struct Session {
    storage: Substrate,
    store: SharedStore,
    collection: Rc<Collection>,
    router: SyncRouter,
    id_attribute: String,
}

impl Session {
    pub fn open(config: &CliConfig) -> Result<Self> {
        let storage = Substrate::open(config)?;
        let store = Store::new(config.store.as_str(), storage.clone())?.into_shared();
        let collection = Rc::new(Collection::new().with_local_storage(store.clone()));

        Ok(Self {
            storage,
            store,
            collection,
            router: SyncRouter::default(),
            id_attribute: config.id_attribute.clone(),
        })
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn substrate(&self) -> &Substrate {
        &self.storage
    }

    /// Run `command`, returning the JSON to print.
    pub async fn run(&self, command: &Command) -> Result<Value> {
        debug!("Running {:?}", command);
        match command {
            Command::List => {
                let mut collection = (*self.collection).clone();
                self.sync(Verb::Read, &mut collection).await
            }
            Command::Get { id } => self.sync(Verb::Read, &mut self.model_for(id)?).await,
            Command::Create { json } => self.sync(Verb::Create, &mut self.model(json)?).await,
            Command::Update { json } => self.sync(Verb::Update, &mut self.model(json)?).await,
            Command::Delete { id } => self.sync(Verb::Delete, &mut self.model_for(id)?).await,
            Command::Clear => {
                let mut store = self.store.borrow_mut();
                store.clear()?;
                let name = store.name().to_string();
                Ok(json!({ "cleared": name }))
            }
            Command::Keys => {
                let keys = self.storage.keys().map_err(StoreError::from)?;
                Ok(json!(keys))
            }
        }
    }

    async fn sync(&self, verb: Verb, entity: &mut dyn Syncable) -> Result<Value> {
        let response = self.router.sync(verb, entity, SyncOptions::new()).await?;
        Ok(response.into_value())
    }

    /// A model for the record given as JSON text.
    fn model(&self, json: &str) -> Result<Model> {
        let value: Value = serde_json::from_str(json)?;
        let record = Record::from_value(value)?.with_id_attribute(self.id_attribute.as_str());
        Ok(Model::new(record).with_collection(self.collection.clone()))
    }

    /// A model carrying only `id`.
    fn model_for(&self, id: &str) -> Result<Model> {
        let mut attributes = serde_json::Map::new();
        attributes.insert(self.id_attribute.clone(), Value::String(id.to_string()));
        let record =
            Record::from_value(Value::Object(attributes))?.with_id_attribute(self.id_attribute.as_str());
        Ok(Model::new(record).with_collection(self.collection.clone()))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("store", &self.store.borrow().name())
            .field("quotas", &self.storage.quotas())
            .field("id_attribute", &self.id_attribute)
            .finish()
    }
}
