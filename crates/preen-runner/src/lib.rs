//! preen-runner - The migration engine
//!
//! Connects discovery and resolution from `preen-core` to a `preen-db`
//! database: the history bookkeeping table, the per-migration transactional
//! applicator, and the run pipeline that sequences them with guaranteed
//! connection teardown.

pub mod apply;
pub mod error;
pub mod history;
pub mod runner;

pub use error::{RunnerError, RunnerResult};
pub use history::HistoryStore;
pub use runner::{run, status, RunOptions};
