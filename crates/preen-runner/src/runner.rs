//! The migration run pipeline.
//!
//! Connect, ensure the history table, discover, resolve, apply everything
//! pending in version order, release the connection. Each stage's failure
//! short-circuits the rest; the connection is released exactly once on
//! every path.

use crate::apply::apply;
use crate::error::{RunnerError, RunnerResult};
use crate::history::HistoryStore;
use preen_core::{discover, resolve, Logger, RunSummary, StatusReport};
use preen_db::{Database, DuckDbBackend};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// What a run needs: where the database lives and where the scripts are.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// DuckDB database path, or `:memory:`.
    pub database: String,
    /// Directory containing migration scripts.
    pub folder: PathBuf,
}

/// Apply all pending migrations.
///
/// Returns the versions applied this run, or the first fatal error. The
/// connection is released before either leaves this function.
pub async fn run(options: &RunOptions, logger: &Logger) -> RunnerResult<RunSummary> {
    logger.info("initiating migration run");
    let db = connect(&options.database, logger).map_err(|e| {
        logger.error(&e.to_string());
        e
    })?;

    let outcome = run_pipeline(&*db, &options.folder, logger).await;
    release(db, logger);

    match &outcome {
        Ok(summary) => logger.info(&format!(
            "finished migration run: [{}] applied, [{}] already applied",
            summary.applied.len(),
            summary.skipped
        )),
        Err(e) => logger.error(&e.to_string()),
    }
    outcome
}

/// Report applied history and pending scripts without applying anything.
pub async fn status(options: &RunOptions, logger: &Logger) -> RunnerResult<StatusReport> {
    let db = connect(&options.database, logger).map_err(|e| {
        logger.error(&e.to_string());
        e
    })?;

    let outcome = status_pipeline(&*db, &options.folder, logger).await;
    release(db, logger);

    if let Err(e) = &outcome {
        logger.error(&e.to_string());
    }
    outcome
}

fn connect(database: &str, logger: &Logger) -> RunnerResult<Box<dyn Database>> {
    let db = DuckDbBackend::new(database).map_err(|e| RunnerError::Connection(e.to_string()))?;
    logger.info("connected to database");
    Ok(Box::new(db))
}

/// Release the connection; a failure here is logged and never overrides the
/// run outcome.
fn release(db: Box<dyn Database>, logger: &Logger) {
    match db.close() {
        Ok(()) => logger.info("database connection closed"),
        Err(e) => logger.error(&RunnerError::Close(e.to_string()).to_string()),
    }
}

async fn run_pipeline(
    db: &dyn Database,
    folder: &Path,
    logger: &Logger,
) -> RunnerResult<RunSummary> {
    let history = HistoryStore::new(db);
    history
        .ensure_table()
        .await
        .map_err(|e| RunnerError::Schema(e.to_string()))?;

    let discovered =
        discover(folder, logger).map_err(|e| RunnerError::Discovery(e.to_string()))?;
    let discovered_count = discovered.len();

    let applied = history
        .list_applied()
        .await
        .map_err(|e| RunnerError::Resolution(e.to_string()))?;
    let pending = resolve(discovered, &applied, logger)
        .map_err(|e| RunnerError::Resolution(e.to_string()))?;
    let skipped = discovered_count - pending.len();

    let mut applied_now = Vec::with_capacity(pending.len());
    for script in &pending {
        // Fail-fast: the first failure aborts the run, later versions are
        // never attempted.
        apply(db, &history, script, logger).await?;
        applied_now.push(script.version);
    }

    Ok(RunSummary {
        applied: applied_now,
        skipped,
    })
}

async fn status_pipeline(
    db: &dyn Database,
    folder: &Path,
    logger: &Logger,
) -> RunnerResult<StatusReport> {
    let history = HistoryStore::new(db);
    history
        .ensure_table()
        .await
        .map_err(|e| RunnerError::Schema(e.to_string()))?;

    let discovered =
        discover(folder, logger).map_err(|e| RunnerError::Discovery(e.to_string()))?;

    let records = history
        .list_records()
        .await
        .map_err(|e| RunnerError::Resolution(e.to_string()))?;
    let applied: HashSet<i64> = records.iter().map(|r| r.version).collect();
    let pending = resolve(discovered, &applied, logger)
        .map_err(|e| RunnerError::Resolution(e.to_string()))?;

    Ok(StatusReport {
        applied: records,
        pending,
    })
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
