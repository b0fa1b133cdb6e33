use super::*;

#[tokio::test]
async fn test_in_memory() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert_eq!(db.db_type(), "duckdb");
}

#[tokio::test]
async fn test_execute_and_query_int_column() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE TABLE nums (n INTEGER)").await.unwrap();
    db.execute("INSERT INTO nums VALUES (3), (1), (2)").await.unwrap();

    let values = db
        .query_int_column("SELECT n FROM nums ORDER BY n")
        .await
        .unwrap();
    assert_eq!(values, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_query_int_column_empty_table() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE TABLE empty (n INTEGER)").await.unwrap();

    let values = db.query_int_column("SELECT n FROM empty").await.unwrap();
    assert!(values.is_empty());
}

#[tokio::test]
async fn test_query_rows_stringifies_mixed_columns() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE TABLE t (id INTEGER, label TEXT, ok BOOLEAN)")
        .await
        .unwrap();
    db.execute("INSERT INTO t VALUES (1, 'alpha', true)")
        .await
        .unwrap();

    let rows = db.query_rows("SELECT id, label, ok FROM t").await.unwrap();
    assert_eq!(rows, vec![vec!["1".to_string(), "alpha".to_string(), "true".to_string()]]);
}

#[tokio::test]
async fn test_execute_failure_is_execution_error() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.execute("INSERT INTO missing VALUES (1)").await.unwrap_err();
    assert!(matches!(err, DbError::ExecutionError(_)));
}

#[tokio::test]
async fn test_query_failure_is_query_error() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.query_int_column("SELECT n FROM missing").await.unwrap_err();
    assert!(matches!(err, DbError::QueryError(_)));
}

#[tokio::test]
async fn test_rollback_discards_changes() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE TABLE t (n INTEGER)").await.unwrap();

    db.begin_transaction().await.unwrap();
    db.execute("INSERT INTO t VALUES (1)").await.unwrap();
    db.rollback().await.unwrap();

    let values = db.query_int_column("SELECT n FROM t").await.unwrap();
    assert!(values.is_empty());
}

#[tokio::test]
async fn test_commit_persists_changes() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute("CREATE TABLE t (n INTEGER)").await.unwrap();

    db.begin_transaction().await.unwrap();
    db.execute("INSERT INTO t VALUES (1)").await.unwrap();
    db.commit().await.unwrap();

    let values = db.query_int_column("SELECT n FROM t").await.unwrap();
    assert_eq!(values, vec![1]);
}

#[tokio::test]
async fn test_commit_without_transaction_is_transaction_error() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.commit().await.unwrap_err();
    assert!(matches!(err, DbError::TransactionError(_)));
}

#[tokio::test]
async fn test_close_releases_the_connection() {
    let db: Box<dyn Database> = Box::new(DuckDbBackend::in_memory().unwrap());
    db.close().unwrap();
}

#[tokio::test]
async fn test_file_backed_database_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("test.duckdb");

    {
        let db = DuckDbBackend::new(path.to_str().unwrap()).unwrap();
        db.execute("CREATE TABLE t (n INTEGER)").await.unwrap();
        db.execute("INSERT INTO t VALUES (42)").await.unwrap();
        Box::new(db).close().unwrap();
    }

    let db = DuckDbBackend::new(path.to_str().unwrap()).unwrap();
    let values = db.query_int_column("SELECT n FROM t").await.unwrap();
    assert_eq!(values, vec![42]);
}
