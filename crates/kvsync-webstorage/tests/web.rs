//! Browser tests; run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use kvsync_core::{KeyValueStorage, Record, Store};
use kvsync_webstorage::{StorageArea, WebStorage};
use serde_json::json;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_session() -> WebStorage {
    let storage = WebStorage::session().unwrap();
    for key in storage.keys().unwrap() {
        storage.remove(&key).unwrap();
    }
    storage
}

#[wasm_bindgen_test]
fn binds_both_areas() {
    assert_eq!(WebStorage::local().unwrap().area(), StorageArea::Local);
    assert_eq!(WebStorage::session().unwrap().area(), StorageArea::Session);
}

#[wasm_bindgen_test]
fn raw_key_value_operations() {
    let storage = fresh_session();

    storage.set("a", "1").unwrap();
    assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(storage.len().unwrap(), 1);

    storage.remove("a").unwrap();
    assert_eq!(storage.get("a").unwrap(), None);
    assert!(storage.is_empty().unwrap());
}

#[wasm_bindgen_test]
fn store_round_trips_through_session_storage() {
    let storage = fresh_session();
    let mut store = Store::new("Todos", storage.clone()).unwrap();

    let mut todo = Record::from_value(json!({ "title": "a" })).unwrap();
    store.create(&mut todo).unwrap();
    let id = todo.id().unwrap();

    let reader = Store::new("Todos", storage.clone()).unwrap();
    assert_eq!(reader.records().as_slice(), [id.as_str()]);
    assert_eq!(
        reader.find(&todo).unwrap(),
        Some(json!({ "id": id.as_str(), "title": "a" }))
    );

    store.clear().unwrap();
    assert!(storage.keys().unwrap().is_empty());
}

#[wasm_bindgen_test]
fn oversized_write_is_a_quota_error() {
    let storage = fresh_session();
    // Well past the 5 MiB every mainstream browser allows
    let big = "x".repeat(16 * 1024 * 1024);

    let err = storage.set("big", &big).unwrap_err();
    assert!(err.is_quota_exceeded(), "unexpected error: {}", err);
}
