//! Injectable sync strategies.

use crate::store::SharedStore;
use crate::sync::dispatch::{run, settle};
use crate::sync::{local_sync, resolve_store, SyncError, SyncFuture, SyncOptions, Syncable, Verb};

/// A transport able to carry out sync verbs.
pub trait SyncStrategy {
    fn sync(&self, verb: Verb, entity: &mut dyn Syncable, options: SyncOptions<'_>) -> SyncFuture;
}

/// Sync through the entity's local-storage store.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSync;

impl SyncStrategy for LocalSync {
    fn sync(&self, verb: Verb, entity: &mut dyn Syncable, options: SyncOptions<'_>) -> SyncFuture {
        local_sync(verb, entity, options)
    }
}

/// Sync every entity against one fixed store.
///
/// The entity's own store and its collection's are not consulted, so a
/// store can act as the sync entry point for records that carry no
/// storage configuration.
#[derive(Debug, Clone)]
pub struct StoreSync {
    store: SharedStore,
}

impl StoreSync {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }
}

impl From<SharedStore> for StoreSync {
    fn from(store: SharedStore) -> Self {
        Self::new(store)
    }
}

impl SyncStrategy for StoreSync {
    fn sync(&self, verb: Verb, entity: &mut dyn Syncable, options: SyncOptions<'_>) -> SyncFuture {
        settle(verb, run(verb, entity, &self.store), options)
    }
}

/// Default-transport placeholder that rejects every call.
///
/// Stands in for a remote transport when none is configured; rejections go
/// through the same callbacks as local sync.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransport;

impl SyncStrategy for NoTransport {
    fn sync(&self, verb: Verb, _entity: &mut dyn Syncable, options: SyncOptions<'_>) -> SyncFuture {
        settle(
            verb,
            Err(SyncError::new("no default transport configured")),
            options,
        )
    }
}

/// Chooses between local sync and a default transport per call.
///
/// Local sync is used when the caller has not asked for the default
/// transport and a store resolves from the entity or its collection.
#[derive(Debug, Clone, Default)]
pub struct SyncRouter<D = NoTransport> {
    local: LocalSync,
    default: D,
}

impl<D: SyncStrategy> SyncRouter<D> {
    pub fn new(default: D) -> Self {
        Self {
            local: LocalSync,
            default,
        }
    }

    /// The strategy that would handle a call for `entity` with `options`.
    pub fn select(&self, entity: &dyn Syncable, options: &SyncOptions<'_>) -> &dyn SyncStrategy {
        if !options.wants_default_transport() && resolve_store(entity).is_some() {
            &self.local
        } else {
            &self.default
        }
    }

    pub fn default_transport(&self) -> &D {
        &self.default
    }
}

impl<D: SyncStrategy> SyncStrategy for SyncRouter<D> {
    fn sync(&self, verb: Verb, entity: &mut dyn Syncable, options: SyncOptions<'_>) -> SyncFuture {
        let strategy = self.select(&*entity, &options);
        strategy.sync(verb, entity, options)
    }
}
