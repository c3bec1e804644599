//! Backups taken before a module is removed

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::common::fs;
use crate::error::{self, Result};
use crate::registry::ModuleHandle;

/// Creates a restorable copy of a module
pub trait BackupService {
    /// Back `module` up; returns where the copy went, if anywhere
    fn create_backup(&self, module: &ModuleHandle, reason: &str) -> Result<Option<PathBuf>>;
}

/// Takes no backups
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBackup;

impl BackupService for NoBackup {
    fn create_backup(&self, _module: &ModuleHandle, _reason: &str) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// Copies the module directory to `<directory>/<Name>-<unix seconds>`
#[derive(Debug, Clone)]
pub struct DirectoryBackup {
    directory: PathBuf,
}

impl DirectoryBackup {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn target_for(&self, name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let mut target = self.directory.join(format!("{name}-{stamp}"));
        let mut n = 1;
        while target.exists() {
            target = self.directory.join(format!("{name}-{stamp}-{n}"));
            n += 1;
        }
        target
    }
}

impl BackupService for DirectoryBackup {
    fn create_backup(&self, module: &ModuleHandle, reason: &str) -> Result<Option<PathBuf>> {
        if !module.path().is_dir() {
            return Err(error::fs::not_found(module.path()));
        }

        let target = self.target_for(module.name());
        fs::copy_dir_recursive(module.path(), &target)
            .map_err(|e| error::fs::write_failed(&target, e))?;

        tracing::info!(
            module = module.name(),
            backup = %target.display(),
            reason,
            "module backed up"
        );
        Ok(Some(target))
    }
}
