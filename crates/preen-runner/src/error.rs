//! Error types for preen-runner

use thiserror::Error;

/// Migration run errors.
///
/// Every variant is fatal to the run: it is logged with context and
/// propagated to the caller after the connection has been released. The one
/// recovered condition — a file name that fails the grammar — never reaches
/// this type; the locator logs and skips it.
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Cannot reach the target database (R001)
    #[error("[R001] could not connect to database: {0}")]
    Connection(String),

    /// History table cannot be created or verified (R002)
    #[error("[R002] could not create migration history table: {0}")]
    Schema(String),

    /// Migrations directory cannot be read (R003)
    #[error("[R003] could not read migrations: {0}")]
    Discovery(String),

    /// Applied-history set cannot be read or merged (R004)
    #[error("[R004] could not resolve pending migrations: {0}")]
    Resolution(String),

    /// A migration statement failed; the transaction was rolled back (R005)
    #[error("[R005] migration V{version} failed: {message}")]
    Statement { version: i64, message: String },

    /// The history insert failed after the script succeeded (R006)
    #[error("[R006] migration V{version} could not be recorded: {message}")]
    Record { version: i64, message: String },

    /// Transaction control (begin/commit) failed for a migration (R007)
    #[error("[R007] transaction for migration V{version} failed: {message}")]
    Transaction { version: i64, message: String },

    /// Script content cannot be read from disk (R008)
    #[error("[R008] could not read migration script '{path}': {message}")]
    ScriptRead { path: String, message: String },

    /// Connection release failed; logged, never overrides the run outcome (R009)
    #[error("[R009] could not close database connection: {0}")]
    Close(String),
}

/// Result type alias for [`RunnerError`].
pub type RunnerResult<T> = Result<T, RunnerError>;
