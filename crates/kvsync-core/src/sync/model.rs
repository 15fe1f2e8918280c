//! Entities the dispatcher syncs, and how their store is resolved.

use std::rc::Rc;

use crate::record::Record;
use crate::store::SharedStore;

/// Where an entity gets its store: a plain value or a getter.
#[derive(Clone)]
pub enum StoreSource {
    Value(SharedStore),
    Getter(Rc<dyn Fn() -> Option<SharedStore>>),
}

impl StoreSource {
    /// Build a getter source from a closure.
    pub fn getter(f: impl Fn() -> Option<SharedStore> + 'static) -> Self {
        StoreSource::Getter(Rc::new(f))
    }

    /// Resolve to a store, invoking the getter if this is one.
    pub fn resolve(&self) -> Option<SharedStore> {
        match self {
            StoreSource::Value(store) => Some(Rc::clone(store)),
            StoreSource::Getter(get) => get(),
        }
    }
}

impl From<SharedStore> for StoreSource {
    fn from(store: SharedStore) -> Self {
        StoreSource::Value(store)
    }
}

impl std::fmt::Debug for StoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreSource::Value(store) => f.debug_tuple("Value").field(store).finish(),
            StoreSource::Getter(_) => f.write_str("Getter(..)"),
        }
    }
}

/// Anything the dispatcher can sync: a model or a collection.
pub trait Syncable {
    /// The record this entity persists; `None` for collections.
    fn record(&self) -> Option<&Record>;

    fn record_mut(&mut self) -> Option<&mut Record>;

    /// This entity's own store capability.
    fn local_storage(&self) -> Option<&StoreSource>;

    /// Owning collection, consulted when the entity has no store of its own.
    fn collection(&self) -> Option<&dyn Syncable> {
        None
    }
}

/// Resolve the store for `entity`: its own first, then its collection's.
pub fn resolve_store(entity: &dyn Syncable) -> Option<SharedStore> {
    entity
        .local_storage()
        .and_then(StoreSource::resolve)
        .or_else(|| {
            entity
                .collection()
                .and_then(|collection| collection.local_storage())
                .and_then(StoreSource::resolve)
        })
}

/// A named group of models sharing one store.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    local_storage: Option<StoreSource>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_storage(mut self, source: impl Into<StoreSource>) -> Self {
        self.local_storage = Some(source.into());
        self
    }
}

impl Syncable for Collection {
    fn record(&self) -> Option<&Record> {
        None
    }

    fn record_mut(&mut self) -> Option<&mut Record> {
        None
    }

    fn local_storage(&self) -> Option<&StoreSource> {
        self.local_storage.as_ref()
    }
}

/// A single record, optionally owned by a collection.
#[derive(Debug, Clone)]
pub struct Model {
    record: Record,
    local_storage: Option<StoreSource>,
    collection: Option<Rc<Collection>>,
}

impl Model {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            local_storage: None,
            collection: None,
        }
    }

    pub fn with_local_storage(mut self, source: impl Into<StoreSource>) -> Self {
        self.local_storage = Some(source.into());
        self
    }

    pub fn with_collection(mut self, collection: Rc<Collection>) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn into_record(self) -> Record {
        self.record
    }
}

impl Syncable for Model {
    fn record(&self) -> Option<&Record> {
        Some(&self.record)
    }

    fn record_mut(&mut self) -> Option<&mut Record> {
        Some(&mut self.record)
    }

    fn local_storage(&self) -> Option<&StoreSource> {
        self.local_storage.as_ref()
    }

    fn collection(&self) -> Option<&dyn Syncable> {
        self.collection
            .as_deref()
            .map(|collection| collection as &dyn Syncable)
    }
}
