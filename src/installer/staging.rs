//! Scratch directories that must not outlive an install call
//!
//! ## Usage
//!
//! ```ignore
//! let mut staging = Staging::new(config.staging_path());
//! staging.track_file(&archive);
//! staging.prepare()?;
//!
//! // Extract and move entries...
//!
//! // Explicit cleanup; otherwise it happens on drop
//! staging.cleanup();
//! ```

use std::path::{Path, PathBuf};

use crate::common::fs;
use crate::error::{self, Result};

/// A scratch directory plus consumed files, removed on every exit path
#[derive(Debug)]
pub struct Staging {
    dir: PathBuf,

    /// Files consumed by the install (e.g. the archive)
    consumed_files: Vec<PathBuf>,

    cleaned: bool,
}

impl Staging {
    /// Guard for `dir`; nothing is touched on disk yet
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            consumed_files: Vec::new(),
            cleaned: false,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Make the scratch directory exist and be empty
    pub fn prepare(&self) -> Result<()> {
        fs::clean_dir(&self.dir).map_err(|e| error::fs::write_failed(&self.dir, e))
    }

    /// Delete `path` during cleanup as well
    pub fn track_file(&mut self, path: impl Into<PathBuf>) {
        self.consumed_files.push(path.into());
    }

    /// Remove the scratch directory and every tracked file
    ///
    /// Failures are logged, never returned. Runs at most once.
    pub fn cleanup(&mut self) {
        if self.cleaned {
            return;
        }
        self.cleaned = true;

        if let Err(e) = fs::remove_dir(&self.dir) {
            tracing::warn!(
                path = %self.dir.display(),
                error = %e,
                "failed to remove staging directory"
            );
        }

        for file in &self.consumed_files {
            if let Err(e) = fs::remove_file(file) {
                tracing::warn!(
                    path = %file.display(),
                    error = %e,
                    "failed to remove consumed file"
                );
            }
        }
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        self.cleanup();
    }
}
