//! Run result summaries.

use crate::script::MigrationScript;
use serde::Serialize;

/// Outcome of a successful migration run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Versions applied by this run, in application order.
    pub applied: Vec<i64>,
    /// Discovered migrations that were already applied and skipped.
    pub skipped: usize,
}

impl RunSummary {
    /// True when the run had nothing to do.
    pub fn is_noop(&self) -> bool {
        self.applied.is_empty()
    }
}

/// One applied row of the history table.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedMigration {
    /// Version recorded at apply time.
    pub version: i64,
    /// Label recorded at apply time.
    pub name: String,
    /// Server-assigned application timestamp, rendered as text.
    pub applied_at: String,
}

/// Read-only applied/pending report for the status command.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// History rows, ascending by version.
    pub applied: Vec<AppliedMigration>,
    /// Discovered scripts not yet applied, ascending by version.
    pub pending: Vec<MigrationScript>,
}
