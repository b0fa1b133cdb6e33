//! Pending-set resolution.
//!
//! Merges discovered scripts with applied history: sorts ascending by
//! version, rejects duplicate versions, and drops anything already applied.
//! Pure apart from the pending-count log line.

use crate::error::{CoreError, CoreResult};
use crate::logging::Logger;
use crate::script::MigrationScript;
use std::collections::HashSet;

/// Compute the ordered work list from `discovered` and the `applied` set.
///
/// Two discovered scripts with the same version are a data-integrity
/// condition and fail with [`CoreError::DuplicateVersion`] before any work
/// is attempted.
pub fn resolve(
    mut discovered: Vec<MigrationScript>,
    applied: &HashSet<i64>,
    logger: &Logger,
) -> CoreResult<Vec<MigrationScript>> {
    discovered.sort_by_key(|script| script.version);

    for pair in discovered.windows(2) {
        if pair[0].version == pair[1].version {
            return Err(CoreError::DuplicateVersion {
                version: pair[0].version,
                first: pair[0].path.display().to_string(),
                second: pair[1].path.display().to_string(),
            });
        }
    }

    let pending: Vec<MigrationScript> = discovered
        .into_iter()
        .filter(|script| !applied.contains(&script.version))
        .collect();

    logger.info(&format!("[{}] migrations pending", pending.len()));
    Ok(pending)
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
