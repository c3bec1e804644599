//! Derived cache invalidation
//!
//! The three clear calls are independent and idempotent; callers may run
//! them in any order.

use std::path::{Path, PathBuf};

use crate::common::fs;
use crate::config::ManagerConfig;

/// Clears caches derived from the module set
pub trait CacheInvalidator {
    fn clear_config(&self);
    fn clear_route(&self);
    fn clear_generic(&self);

    /// Run all three
    fn clear_all(&self) {
        self.clear_config();
        self.clear_route();
        self.clear_generic();
    }
}

/// Does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCacheInvalidator;

impl CacheInvalidator for NoopCacheInvalidator {
    fn clear_config(&self) {}
    fn clear_route(&self) {}
    fn clear_generic(&self) {}
}

/// Deletes configured cache files and directories
#[derive(Debug, Clone, Default)]
pub struct PathCacheInvalidator {
    config: Vec<PathBuf>,
    route: Vec<PathBuf>,
    generic: Vec<PathBuf>,
}

impl PathCacheInvalidator {
    pub fn new(config: Vec<PathBuf>, route: Vec<PathBuf>, generic: Vec<PathBuf>) -> Self {
        Self {
            config,
            route,
            generic,
        }
    }

    /// Paths from the `cache` section, resolved against the base path
    pub fn from_config(config: &ManagerConfig) -> Self {
        let resolve = |paths: &[PathBuf]| -> Vec<PathBuf> {
            paths.iter().map(|p| config.resolve(p)).collect()
        };
        Self::new(
            resolve(&config.cache.config),
            resolve(&config.cache.route),
            resolve(&config.cache.generic),
        )
    }

    fn clear(kind: &str, paths: &[PathBuf]) {
        for path in paths {
            if let Err(e) = remove_path(path) {
                tracing::warn!(
                    cache = kind,
                    path = %path.display(),
                    error = %e,
                    "failed to clear cache"
                );
            }
        }
        tracing::debug!(cache = kind, "cache cleared");
    }
}

fn remove_path(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

impl CacheInvalidator for PathCacheInvalidator {
    fn clear_config(&self) {
        Self::clear("config", &self.config);
    }

    fn clear_route(&self) {
        Self::clear("route", &self.route);
    }

    fn clear_generic(&self) {
        Self::clear("generic", &self.generic);
    }
}
