//! Sync dispatcher tests through the public strategy API

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kvsync_core::{
    Collection, MemoryStorage, Model, Record, SharedStore, Store, StoreSource, SyncOptions,
    SyncResponse, SyncRouter, SyncStrategy, Syncable, Verb,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn todos() -> (Rc<Collection>, SharedStore) {
    let store = Store::new("Todos", MemoryStorage::new()).unwrap().into_shared();
    let collection = Rc::new(Collection::new().with_local_storage(Rc::clone(&store)));
    (collection, store)
}

fn member(collection: &Rc<Collection>, value: Value) -> Model {
    Model::new(Record::from_value(value).unwrap()).with_collection(Rc::clone(collection))
}

#[tokio::test]
async fn test_read_model_seven_not_found() {
    let (collection, _) = todos();
    let router: SyncRouter = SyncRouter::default();
    let mut model = member(&collection, json!({ "id": 7 }));

    let result = router.sync(Verb::Read, &mut model, SyncOptions::new()).await;
    assert_eq!(result.unwrap_err().message(), "Record Not Found");
}

#[tokio::test]
async fn test_model_lifecycle_through_collection_store() {
    let (collection, store) = todos();
    let router: SyncRouter = SyncRouter::default();
    let mut model = member(&collection, json!({ "title": "a" }));

    router
        .sync(Verb::Create, &mut model, SyncOptions::new())
        .await
        .unwrap();
    let id = model.record().unwrap().id().unwrap();
    assert_eq!(store.borrow().records().as_slice(), [id.as_str()]);

    model.record_mut().unwrap().set("title", json!("b"));
    let updated = router
        .sync(Verb::Update, &mut model, SyncOptions::new())
        .await
        .unwrap();
    assert_eq!(updated.into_value()["title"], json!("b"));

    let mut listing = Collection::clone(&collection);
    let all = router
        .sync(Verb::Read, &mut listing, SyncOptions::new())
        .await
        .unwrap();
    assert_eq!(all.as_records().map(<[Value]>::len), Some(1));

    router
        .sync(Verb::Delete, &mut model, SyncOptions::new())
        .await
        .unwrap();
    assert!(store.borrow().records().is_empty());
}

#[tokio::test]
async fn test_complete_runs_exactly_once_per_call() {
    let (collection, _) = todos();
    let router: SyncRouter = SyncRouter::default();
    let completions = Cell::new(0);

    for value in [json!({ "id": "missing" }), json!({ "title": "new" })] {
        let mut model = member(&collection, value);
        let verb = if model.record().unwrap().id().is_some() {
            Verb::Read
        } else {
            Verb::Create
        };
        let options = SyncOptions::new().on_complete(|_| completions.set(completions.get() + 1));
        let _ = router.sync(verb, &mut model, options).await;
    }

    assert_eq!(completions.get(), 2);
}

#[tokio::test]
async fn test_success_sees_resolved_value() {
    let (collection, _) = todos();
    let router: SyncRouter = SyncRouter::default();
    let seen: RefCell<Option<SyncResponse>> = RefCell::new(None);
    let mut model = member(&collection, json!({ "id": "x", "done": true }));

    let options = SyncOptions::new().on_success(|r| *seen.borrow_mut() = Some(r.clone()));
    let resolved = router.sync(Verb::Update, &mut model, options).await.unwrap();

    assert_eq!(seen.into_inner(), Some(resolved));
}

#[tokio::test]
async fn test_getter_source_on_collection() {
    let store = Store::new("Lazy", MemoryStorage::new()).unwrap().into_shared();
    let handle = Rc::clone(&store);
    let collection = Rc::new(
        Collection::new().with_local_storage(StoreSource::getter(move || Some(Rc::clone(&handle)))),
    );
    let router: SyncRouter = SyncRouter::default();
    let mut model = member(&collection, json!({ "id": 1 }));

    router
        .sync(Verb::Update, &mut model, SyncOptions::new())
        .await
        .unwrap();
    assert_eq!(store.borrow().records().as_slice(), ["1"]);
}
