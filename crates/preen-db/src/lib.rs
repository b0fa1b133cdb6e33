//! preen-db - Database abstraction layer for Preen
//!
//! This crate provides the `Database` trait — the narrow connection
//! interface the migration pipeline runs against — and the DuckDB
//! implementation.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use traits::Database;
