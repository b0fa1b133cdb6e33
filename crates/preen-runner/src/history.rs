//! Migration history bookkeeping.
//!
//! [`HistoryStore`] is the sole reader and writer of the `migration_schema`
//! table: idempotent creation, applied-version reads, and the per-migration
//! insert that rides the applicator's in-flight transaction.

use preen_core::{AppliedMigration, MigrationScript};
use preen_db::{Database, DbError, DbResult};
use std::collections::HashSet;

/// Name of the bookkeeping table.
pub const HISTORY_TABLE: &str = "migration_schema";

/// History table access bound to one connection.
pub struct HistoryStore<'a> {
    db: &'a dyn Database,
}

impl<'a> HistoryStore<'a> {
    /// Bind a store to `db`.
    pub fn new(db: &'a dyn Database) -> Self {
        Self { db }
    }

    /// Create the history table when absent; safe to call every run.
    pub async fn ensure_table(&self) -> DbResult<()> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {HISTORY_TABLE} (\n    \
                version INTEGER PRIMARY KEY,\n    \
                name TEXT NOT NULL,\n    \
                applied_at TIMESTAMP NOT NULL DEFAULT now()\n\
            )"
        );
        self.db.execute(&sql).await?;
        Ok(())
    }

    /// Versions with an existing history row.
    pub async fn list_applied(&self) -> DbResult<HashSet<i64>> {
        let versions = self
            .db
            .query_int_column(&format!("SELECT version FROM {HISTORY_TABLE}"))
            .await?;
        Ok(versions.into_iter().collect())
    }

    /// Full history rows, ascending by version.
    pub async fn list_records(&self) -> DbResult<Vec<AppliedMigration>> {
        let rows = self
            .db
            .query_rows(&format!(
                "SELECT version, name, CAST(applied_at AS VARCHAR) \
                 FROM {HISTORY_TABLE} ORDER BY version"
            ))
            .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let version = row
                .first()
                .and_then(|v| v.parse::<i64>().ok())
                .ok_or_else(|| DbError::QueryError(format!("malformed history row: {row:?}")))?;
            records.push(AppliedMigration {
                version,
                name: row.get(1).cloned().unwrap_or_default(),
                applied_at: row.get(2).cloned().unwrap_or_default(),
            });
        }
        Ok(records)
    }

    /// Insert the history row for `script` on the caller's in-flight
    /// transaction. Opens and closes no transaction itself, so the insert is
    /// atomic with the script's own statements.
    pub async fn record_applied(&self, script: &MigrationScript) -> DbResult<()> {
        // Names come from `\w+` file names, so quotes cannot occur; escape
        // anyway since the narrow Database interface has no bind parameters.
        let sql = format!(
            "INSERT INTO {HISTORY_TABLE} (version, name) VALUES ({}, '{}')",
            script.version,
            script.name.replace('\'', "''"),
        );
        self.db.execute(&sql).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
