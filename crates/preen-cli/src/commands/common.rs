//! Shared command plumbing: config loading and option merging.

use crate::cli::GlobalArgs;
use anyhow::Result;
use preen_core::{Config, ConsoleSink, Logger};
use preen_runner::RunOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolve run options and the logger from the config file and CLI flags.
///
/// An explicit `--config` must exist; the default `preen.yml` is optional
/// and falls back to built-in defaults. Flags override file values.
pub fn prepare(global: &GlobalArgs) -> Result<(RunOptions, Logger)> {
    let root = PathBuf::from(&global.project_dir);

    let config = match &global.config {
        Some(path) => Config::load(Path::new(path))?,
        None => {
            let default_path = root.join("preen.yml");
            if default_path.exists() {
                Config::load(&default_path)?
            } else {
                Config::default()
            }
        }
    };

    let folder = match &global.folder {
        Some(folder) => {
            let folder = Path::new(folder);
            if folder.is_absolute() {
                folder.to_path_buf()
            } else {
                root.join(folder)
            }
        }
        None => config.folder_absolute(&root),
    };

    let database = global
        .database
        .clone()
        .unwrap_or_else(|| config.database.path.clone());

    let enabled = config.logging && !global.quiet;
    let logger = Logger::new(Arc::new(ConsoleSink), enabled);

    Ok((RunOptions { database, folder }, logger))
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
