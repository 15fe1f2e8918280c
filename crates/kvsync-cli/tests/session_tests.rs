//! End-to-end command runs against memory and SQLite substrates

use kvsync_cli::{Backend, CliConfig, CliError, Command, Session};
use kvsync_core::StorageQuotas;
use pretty_assertions::assert_eq;
use serde_json::json;

fn create(json: &str) -> Command {
    Command::Create {
        json: json.to_string(),
    }
}

#[tokio::test]
async fn test_create_then_list_and_get() {
    let session = Session::open(&CliConfig::memory("Todos")).unwrap();

    let created = session.run(&create(r#"{"id":"1","title":"a"}"#)).await.unwrap();
    assert_eq!(created, json!({ "id": "1", "title": "a" }));

    let listed = session.run(&Command::List).await.unwrap();
    assert_eq!(listed, json!([{ "id": "1", "title": "a" }]));

    let got = session
        .run(&Command::Get { id: "1".to_string() })
        .await
        .unwrap();
    assert_eq!(got, json!({ "id": "1", "title": "a" }));
}

#[tokio::test]
async fn test_get_float_id_by_integer_text() {
    let session = Session::open(&CliConfig::memory("Todos")).unwrap();
    session.run(&create(r#"{"id":7.0,"title":"a"}"#)).await.unwrap();

    let got = session
        .run(&Command::Get { id: "7".to_string() })
        .await
        .unwrap();
    assert_eq!(got["title"], json!("a"));
}

#[tokio::test]
async fn test_get_missing_reports_not_found() {
    let session = Session::open(&CliConfig::memory("Todos")).unwrap();

    let err = session
        .run(&Command::Get { id: "7".to_string() })
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::Sync(_)));
    assert_eq!(err.to_string(), "Record Not Found");
}

#[tokio::test]
async fn test_delete_and_clear() {
    let session = Session::open(&CliConfig::memory("Todos")).unwrap();
    session.run(&create(r#"{"id":"1"}"#)).await.unwrap();
    session.run(&create(r#"{"id":"2"}"#)).await.unwrap();

    session
        .run(&Command::Delete { id: "1".to_string() })
        .await
        .unwrap();
    assert_eq!(
        session.run(&Command::Keys).await.unwrap(),
        json!(["Todos", "Todos-2"])
    );

    let cleared = session.run(&Command::Clear).await.unwrap();
    assert_eq!(cleared, json!({ "cleared": "Todos" }));
    assert_eq!(session.run(&Command::Keys).await.unwrap(), json!([]));
}

#[tokio::test]
async fn test_custom_id_attribute() {
    let mut config = CliConfig::memory("Notes");
    config.id_attribute = "_id".to_string();
    let session = Session::open(&config).unwrap();

    let created = session.run(&create(r#"{"body":"x"}"#)).await.unwrap();
    let id = created["_id"].as_str().unwrap().to_string();
    assert!(kvsync_core::is_generated_id(&id));

    let got = session.run(&Command::Get { id }).await.unwrap();
    assert_eq!(got["body"], json!("x"));
}

#[tokio::test]
async fn test_quota_refusal_is_reported() {
    let mut config = CliConfig::memory("Todos");
    config.quotas = Some(StorageQuotas::new(1, usize::MAX));
    let session = Session::open(&config).unwrap();

    // Entry plus index would need two slots
    let err = session.run(&create(r#"{"id":"1"}"#)).await.unwrap_err();
    assert_eq!(err.to_string(), "quota exceeded: entries: 1 >= 1");
}

#[test]
fn test_backend_wrapped_only_with_limits() {
    let session = Session::open(&CliConfig::memory("Todos")).unwrap();
    assert!(session.substrate().quotas().is_none());

    let mut config = CliConfig::memory("Todos");
    config.quotas = Some(StorageQuotas::new(usize::MAX, 1024));
    let session = Session::open(&config).unwrap();
    assert_eq!(
        session.substrate().quotas(),
        Some(&StorageQuotas::new(usize::MAX, 1024))
    );
}

#[tokio::test]
async fn test_invalid_json_argument() {
    let session = Session::open(&CliConfig::memory("Todos")).unwrap();
    let err = session.run(&create("{not json")).await.unwrap_err();
    assert!(matches!(err, CliError::Json(_)));
}

#[tokio::test]
async fn test_sqlite_persists_between_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = CliConfig::memory("Todos");
    config.backend = Backend::Sqlite(dir.path().join("kvsync.db"));

    {
        let session = Session::open(&config).unwrap();
        session.run(&create(r#"{"id":"1","title":"a"}"#)).await.unwrap();
    }

    let session = Session::open(&config).unwrap();
    assert_eq!(
        session.run(&Command::List).await.unwrap(),
        json!([{ "id": "1", "title": "a" }])
    );
}
