//! Transactional application of a single migration.
//!
//! State machine per migration: open transaction, execute statements in
//! source order, insert the history row on the same transaction, commit.
//! Any failure after the transaction opens rolls back, so a migration
//! either fully lands — script plus history row — or not at all.

use crate::error::{RunnerError, RunnerResult};
use crate::history::HistoryStore;
use preen_core::{split_statements, Logger, MigrationScript};
use preen_db::Database;

/// Apply one pending migration inside its own transaction.
///
/// The caller invokes this strictly in resolver order and never
/// concurrently; the next migration starts only after this one has
/// committed. On failure the rollback is best-effort: a rollback error is
/// logged and the original failure is returned unchanged.
pub async fn apply(
    db: &dyn Database,
    history: &HistoryStore<'_>,
    script: &MigrationScript,
    logger: &Logger,
) -> RunnerResult<()> {
    let content =
        std::fs::read_to_string(&script.path).map_err(|e| RunnerError::ScriptRead {
            path: script.path.display().to_string(),
            message: e.to_string(),
        })?;
    let statements = split_statements(&content);

    db.begin_transaction()
        .await
        .map_err(|e| RunnerError::Transaction {
            version: script.version,
            message: e.to_string(),
        })?;

    match execute_in_transaction(db, history, script, &statements, logger).await {
        Ok(()) => {
            logger.info(&format!(
                "migration V{} ({}) applied",
                script.version, script.name
            ));
            Ok(())
        }
        Err(e) => {
            if let Err(rollback_err) = db.rollback().await {
                logger.error(&format!(
                    "rollback of migration V{} failed: {rollback_err}",
                    script.version
                ));
            }
            logger.error(&format!("migration V{} failed: {e}", script.version));
            Err(e)
        }
    }
}

/// Statements, history record, and commit, in that order. Returns the first
/// failure; the caller owns the rollback.
async fn execute_in_transaction(
    db: &dyn Database,
    history: &HistoryStore<'_>,
    script: &MigrationScript,
    statements: &[String],
    logger: &Logger,
) -> RunnerResult<()> {
    for statement in statements {
        logger.info(&format!("executing: {statement}"));
        db.execute(statement)
            .await
            .map_err(|e| RunnerError::Statement {
                version: script.version,
                message: e.to_string(),
            })?;
    }

    history
        .record_applied(script)
        .await
        .map_err(|e| RunnerError::Record {
            version: script.version,
            message: e.to_string(),
        })?;

    db.commit().await.map_err(|e| RunnerError::Transaction {
        version: script.version,
        message: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "apply_test.rs"]
mod tests;
