//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Database abstraction trait for Preen
///
/// The narrow interface the migration pipeline consumes: statement
/// execution, two read shapes, connection-scoped transaction control, and
/// explicit release. Implementations must be Send + Sync for async
/// operation; the pipeline itself never issues two calls concurrently.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a single SQL statement, returning affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute a query whose first column is an integer, collecting it
    async fn query_int_column(&self, sql: &str) -> DbResult<Vec<i64>>;

    /// Execute a query and return every row with its values stringified
    async fn query_rows(&self, sql: &str) -> DbResult<Vec<Vec<String>>>;

    /// Open a transaction on the connection
    async fn begin_transaction(&self) -> DbResult<()>;

    /// Commit the open transaction
    async fn commit(&self) -> DbResult<()>;

    /// Roll back the open transaction
    async fn rollback(&self) -> DbResult<()>;

    /// Release the underlying connection. Consumes the handle so release
    /// can only happen once.
    fn close(self: Box<Self>) -> DbResult<()>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}
