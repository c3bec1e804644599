//! Command helper utilities

use std::path::{Path, PathBuf};

use modman::config::ManagerConfig;
use modman::error::{self, Result};

/// Resolve the application root from the optional argument
///
/// If a base path is provided, use it. Otherwise, resolve to the current
/// directory.
pub fn resolve_base_path(base_path: Option<PathBuf>) -> Result<PathBuf> {
    match base_path {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| {
            error::fs::io_error(format!("Failed to get current directory: {e}"))
        }),
    }
}

/// Load the configuration for the resolved base path
pub fn load_config(base_path: Option<PathBuf>, config: Option<&Path>) -> Result<ManagerConfig> {
    let base_path = resolve_base_path(base_path)?;
    if !base_path.is_dir() {
        return Err(error::fs::not_found(&base_path));
    }
    ManagerConfig::load(&base_path, config)
}
