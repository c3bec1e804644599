//! Registry backed by the module tree and a JSON statuses file
//!
//! A module is any directory directly under the module tree whose
//! `module.json` declares a name. Enabled flags live in the statuses file as
//! `{ "<Name>": true|false }`; modules missing from it are disabled.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::common::fs;
use crate::error::{self, Result};

use super::{ModuleHandle, ModuleRegistry};

/// File-backed [`ModuleRegistry`]
#[derive(Debug)]
pub struct FileRegistry {
    modules_path: PathBuf,
    statuses_path: PathBuf,
    /// Keyed by lowercased name
    modules: BTreeMap<String, ModuleHandle>,
    statuses: BTreeMap<String, bool>,
}

impl FileRegistry {
    /// Open the registry and scan the module tree once
    pub fn open(
        modules_path: impl Into<PathBuf>,
        statuses_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let statuses_path = statuses_path.into();
        let mut registry = Self {
            modules_path: modules_path.into(),
            statuses: load_statuses(&statuses_path),
            statuses_path,
            modules: BTreeMap::new(),
        };
        registry.scan()?;
        Ok(registry)
    }

    pub fn modules_path(&self) -> &Path {
        &self.modules_path
    }

    fn set_status(&mut self, name: &str, enabled: bool) -> Result<()> {
        let handle = self
            .modules
            .get_mut(&name.to_lowercase())
            .ok_or_else(|| error::module::not_found(name))?;
        handle.set_enabled(enabled);
        self.statuses.insert(handle.name().to_string(), enabled);
        self.save_statuses()
    }

    fn save_statuses(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.statuses)
            .map_err(|e| error::fs::write_failed(&self.statuses_path, e))?;
        fs::write_text(&self.statuses_path, &json)
            .map_err(|e| error::fs::write_failed(&self.statuses_path, e))
    }
}

fn load_statuses(path: &Path) -> BTreeMap<String, bool> {
    let Ok(content) = fs::read_text(path) else {
        return BTreeMap::new();
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(
            path = %path.display(),
            error = %e,
            "invalid statuses file, treating every module as disabled"
        );
        BTreeMap::new()
    })
}

impl ModuleRegistry for FileRegistry {
    fn find(&self, name: &str) -> Option<&ModuleHandle> {
        self.modules.get(&name.to_lowercase())
    }

    fn enable(&mut self, name: &str) -> Result<()> {
        self.set_status(name, true)
    }

    fn disable(&mut self, name: &str) -> Result<()> {
        self.set_status(name, false)
    }

    fn scan(&mut self) -> Result<()> {
        self.modules.clear();
        if !self.modules_path.is_dir() {
            return Ok(());
        }

        let dirs = fs::directories(&self.modules_path)
            .map_err(|e| error::fs::read_failed(&self.modules_path, e))?;

        for dir in dirs {
            let Some(handle) = ModuleHandle::load(&dir) else {
                tracing::debug!(path = %dir.display(), "not a registered module");
                continue;
            };
            let enabled = self.statuses.get(handle.name()).copied().unwrap_or(false);
            let key = handle.lower_name();
            if let Some(existing) = self.modules.get(&key) {
                tracing::warn!(
                    module = handle.name(),
                    path = %dir.display(),
                    existing = %existing.path().display(),
                    "duplicate module name, keeping the first"
                );
                continue;
            }
            self.modules.insert(key, handle.with_enabled(enabled));
        }

        tracing::debug!(count = self.modules.len(), "scanned module tree");
        Ok(())
    }

    fn modules(&self) -> Vec<&ModuleHandle> {
        self.modules.values().collect()
    }
}
