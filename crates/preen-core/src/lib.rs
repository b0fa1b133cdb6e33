//! preen-core - Core library for Preen
//!
//! This crate provides the pure pieces of the migration pipeline: script
//! descriptors and the filename grammar, directory discovery, statement
//! splitting, pending-set resolution, run configuration, and the injected
//! logging capability shared across all Preen components.

pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod resolver;
pub mod script;
pub mod statement;
pub mod summary;

pub use config::{Config, DatabaseConfig};
pub use error::{CoreError, CoreResult};
pub use locator::discover;
pub use logging::{ConsoleSink, FacadeSink, LogSink, Logger, MemorySink};
pub use resolver::resolve;
pub use script::MigrationScript;
pub use statement::split_statements;
pub use summary::{AppliedMigration, RunSummary, StatusReport};
