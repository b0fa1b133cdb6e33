//! Injected logging capability for the migration pipeline.
//!
//! Every component logs through an explicit [`Logger`] handle instead of a
//! process-wide global. Messages carry a fixed tag and an info/error level;
//! a disabled handle drops everything. Logging is side-channel only and never
//! affects control flow.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Fixed tag prepended to every emitted message.
pub const LOG_TAG: &str = "[preen]";

/// A leveled text sink.
///
/// Implementations must be `Send + Sync` so one handle can be shared across
/// the async pipeline.
pub trait LogSink: Send + Sync {
    /// Informational message.
    fn info(&self, message: &str);

    /// Error message.
    fn error(&self, message: &str);
}

/// Sink writing to the platform console: info to stdout, errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Sink forwarding to the `log` facade, for embedders that already route
/// `log` records to a subscriber of their own.
#[derive(Debug, Default)]
pub struct FacadeSink;

impl LogSink for FacadeSink {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Sink collecting messages in memory.
///
/// Useful for asserting on run output in tests or capturing a run report.
#[derive(Debug, Default)]
pub struct MemorySink {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemorySink {
    /// All info messages recorded so far.
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    /// All error messages recorded so far.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl LogSink for MemorySink {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Logging handle threaded through the pipeline.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    enabled: bool,
}

impl Logger {
    /// Create a logger over `sink`.
    pub fn new(sink: Arc<dyn LogSink>, enabled: bool) -> Self {
        Self { sink, enabled }
    }

    /// Console logger, the default sink.
    pub fn console() -> Self {
        Self::new(Arc::new(ConsoleSink), true)
    }

    /// Logger that drops every message.
    pub fn disabled() -> Self {
        Self::new(Arc::new(ConsoleSink), false)
    }

    /// Emit an info-level message with the fixed tag.
    pub fn info(&self, message: &str) {
        if self.enabled {
            self.sink.info(&format!("{LOG_TAG} {message}"));
        }
    }

    /// Emit an error-level message with the fixed tag.
    pub fn error(&self, message: &str) {
        if self.enabled {
            self.sink.error(&format!("{LOG_TAG} {message}"));
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_the_fixed_tag() {
        let sink = Arc::new(MemorySink::default());
        let logger = Logger::new(sink.clone(), true);

        logger.info("connected");
        logger.error("boom");

        assert_eq!(sink.infos(), vec!["[preen] connected".to_string()]);
        assert_eq!(sink.errors(), vec!["[preen] boom".to_string()]);
    }

    #[test]
    fn test_disabled_logger_drops_everything() {
        let sink = Arc::new(MemorySink::default());
        let logger = Logger::new(sink.clone(), false);

        logger.info("connected");
        logger.error("boom");

        assert!(sink.infos().is_empty());
        assert!(sink.errors().is_empty());
    }
}
