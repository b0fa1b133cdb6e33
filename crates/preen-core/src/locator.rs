//! Migration script discovery.
//!
//! Lists a flat directory of `.sql` scripts and parses each file name into a
//! [`MigrationScript`]. A file that does not match the grammar is logged and
//! skipped; a single bad name never aborts discovery. Ordering of the result
//! is directory order — the resolver establishes version order later.

use crate::error::{CoreError, CoreResult};
use crate::logging::Logger;
use crate::script::{parse_file_name, MigrationScript};
use std::path::Path;

/// Discover migration scripts in `dir`.
///
/// An absent or empty directory yields an empty list (a no-op run, not an
/// error); an unreadable one fails with [`CoreError::DirUnreadable`].
pub fn discover(dir: &Path, logger: &Logger) -> CoreResult<Vec<MigrationScript>> {
    if !dir.exists() {
        logger.info("no migrations found");
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| CoreError::DirUnreadable {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CoreError::DirUnreadable {
            path: dir.display().to_string(),
            source: e,
        })?;
        if entry.path().is_dir() {
            continue;
        }
        files.push(entry.path());
    }

    if files.is_empty() {
        logger.info("no migrations found");
        return Ok(Vec::new());
    }
    logger.info(&format!("found [{}] files in migrations folder", files.len()));

    let mut scripts = Vec::new();
    for path in files {
        let file_name = match path.file_name() {
            Some(n) => n.to_string_lossy().into_owned(),
            None => continue,
        };
        match parse_file_name(&file_name, path) {
            Ok(script) => scripts.push(script),
            Err(e) => logger.error(&e.to_string()),
        }
    }

    Ok(scripts)
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod tests;
