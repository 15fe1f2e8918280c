//! Local-storage sync: verb dispatch and outcome settlement.

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::store::{SharedStore, Store};
use crate::sync::{
    resolve_store, SyncError, SyncFuture, SyncOptions, SyncResponse, SyncResult, Syncable, Verb,
    PRIVATE_BROWSING_UNSUPPORTED,
};

/// Sync `entity` against the store resolved from it or its collection.
///
/// Never fails outside the completion protocol: every store failure becomes
/// a rejection message, delivered to `options.error` and to the returned
/// future.
pub fn local_sync(verb: Verb, entity: &mut dyn Syncable, options: SyncOptions<'_>) -> SyncFuture {
    let result = match resolve_store(&*entity) {
        Some(store) => run(verb, entity, &store),
        None => Err(SyncError::new(
            "no local storage configured on model or its collection",
        )),
    };
    settle(verb, result, options)
}

pub(crate) fn run(verb: Verb, entity: &mut dyn Syncable, store: &SharedStore) -> SyncResult {
    let outcome = match store.try_borrow_mut() {
        Ok(mut store) => {
            debug!("Sync {} against {}", verb, store.name());
            apply(verb, entity, &mut store)
        }
        Err(_) => return Err(SyncError::new("store is already in use")),
    };

    match outcome {
        Ok(Some(response)) => Ok(response),
        Ok(None) => Err(SyncError::not_found()),
        Err(e) => Err(failure(&e, store)),
    }
}

fn apply(
    verb: Verb,
    entity: &mut dyn Syncable,
    store: &mut Store,
) -> Result<Option<SyncResponse>, StoreError> {
    match verb {
        Verb::Read => match entity.record() {
            Some(record) if record.id().is_some() => {
                Ok(store.find(record)?.map(SyncResponse::Record))
            }
            _ => Ok(Some(SyncResponse::Records(store.find_all()?))),
        },
        Verb::Create => {
            let record = entity.record_mut().ok_or_else(|| requires_model(verb))?;
            Ok(store.create(record)?.map(SyncResponse::Record))
        }
        Verb::Update => {
            let record = entity.record().ok_or_else(|| requires_model(verb))?;
            Ok(store.update(record)?.map(SyncResponse::Record))
        }
        Verb::Delete => {
            let record = entity.record().ok_or_else(|| requires_model(verb))?;
            Ok(Some(SyncResponse::Record(store.destroy(record)?)))
        }
    }
}

fn requires_model(verb: Verb) -> StoreError {
    StoreError::InvalidArgument(format!("{} requires a model", verb))
}

/// Message for a failed store call.
///
/// A quota error on a storage holding nothing at all means the browser
/// refuses persistent storage outright, as private windows do.
fn failure(err: &StoreError, store: &SharedStore) -> SyncError {
    if err.is_quota_exceeded() && matches!(store.borrow().storage_size(), Ok(0)) {
        return SyncError::new(PRIVATE_BROWSING_UNSUPPORTED);
    }
    SyncError::new(err.to_string())
}

/// Run the legacy callbacks for `result` and wrap it in a settled future.
pub(crate) fn settle(verb: Verb, result: SyncResult, options: SyncOptions<'_>) -> SyncFuture {
    let SyncOptions {
        success,
        error,
        complete,
        ..
    } = options;

    match &result {
        Ok(response) => {
            if let Some(success) = success {
                success(response);
            }
        }
        Err(e) => {
            warn!("Sync {} rejected: {}", verb, e);
            if let Some(error) = error {
                error(e.message());
            }
        }
    }

    if let Some(complete) = complete {
        complete(result.as_ref().ok());
    }

    std::future::ready(result)
}
