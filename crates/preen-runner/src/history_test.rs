use super::*;
use preen_db::DuckDbBackend;
use std::path::PathBuf;

fn script(version: i64, name: &str) -> MigrationScript {
    MigrationScript {
        version,
        name: name.to_string(),
        path: PathBuf::from(format!("V{version}__x.sql")),
    }
}

#[tokio::test]
async fn test_ensure_table_is_idempotent() {
    let db = DuckDbBackend::in_memory().unwrap();
    let store = HistoryStore::new(&db);

    store.ensure_table().await.unwrap();
    store.ensure_table().await.unwrap();

    assert!(store.list_applied().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_record_and_list_applied() {
    let db = DuckDbBackend::in_memory().unwrap();
    let store = HistoryStore::new(&db);
    store.ensure_table().await.unwrap();

    store.record_applied(&script(1, "init")).await.unwrap();
    store.record_applied(&script(3, "add users")).await.unwrap();

    let applied = store.list_applied().await.unwrap();
    assert_eq!(applied.len(), 2);
    assert!(applied.contains(&1));
    assert!(applied.contains(&3));
}

#[tokio::test]
async fn test_list_records_orders_by_version() {
    let db = DuckDbBackend::in_memory().unwrap();
    let store = HistoryStore::new(&db);
    store.ensure_table().await.unwrap();

    store.record_applied(&script(5, "five")).await.unwrap();
    store.record_applied(&script(1, "one")).await.unwrap();

    let records = store.list_records().await.unwrap();
    let versions: Vec<i64> = records.iter().map(|r| r.version).collect();
    assert_eq!(versions, vec![1, 5]);
    assert_eq!(records[0].name, "one");
    assert!(!records[0].applied_at.is_empty());
}

#[tokio::test]
async fn test_record_applied_rejects_duplicate_version() {
    let db = DuckDbBackend::in_memory().unwrap();
    let store = HistoryStore::new(&db);
    store.ensure_table().await.unwrap();

    store.record_applied(&script(1, "init")).await.unwrap();
    // version is the primary key
    assert!(store.record_applied(&script(1, "again")).await.is_err());
}

#[tokio::test]
async fn test_record_applied_escapes_quotes() {
    let db = DuckDbBackend::in_memory().unwrap();
    let store = HistoryStore::new(&db);
    store.ensure_table().await.unwrap();

    store.record_applied(&script(1, "o'brien fix")).await.unwrap();

    let records = store.list_records().await.unwrap();
    assert_eq!(records[0].name, "o'brien fix");
}

#[tokio::test]
async fn test_list_applied_fails_without_table() {
    let db = DuckDbBackend::in_memory().unwrap();
    let store = HistoryStore::new(&db);

    assert!(store.list_applied().await.is_err());
}
