//! Migration script descriptors and the file name grammar.

use crate::error::{CoreError, CoreResult};
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::OnceLock;

/// One discoverable migration script.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MigrationScript {
    /// Version number parsed from the file name; the unique sort key.
    pub version: i64,
    /// Human-readable label: the name group with underscores as spaces.
    pub name: String,
    /// Where the script content lives; not interpreted beyond reading.
    pub path: PathBuf,
}

/// Compiled grammar for migration file names: `V<version>__<name>.sql`.
fn file_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^V(\d+)__(\w+)\.sql$").unwrap())
}

/// Parse `file_name` against the migration grammar.
///
/// `V3__add_users_table.sql` yields version `3` and name `"add users table"`.
/// Returns [`CoreError::InvalidFileName`] when the name does not match or the
/// version digits overflow.
pub fn parse_file_name(file_name: &str, path: PathBuf) -> CoreResult<MigrationScript> {
    let captures = file_name_pattern().captures(file_name).ok_or_else(|| {
        CoreError::InvalidFileName {
            name: file_name.to_string(),
        }
    })?;

    let version: i64 = captures[1].parse().map_err(|_| CoreError::InvalidFileName {
        name: file_name.to_string(),
    })?;

    Ok(MigrationScript {
        version,
        name: captures[2].replace('_', " "),
        path,
    })
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
