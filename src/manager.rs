//! Module manager
//!
//! [`ModuleManager`] is what the CLI (and any embedding application) talks
//! to. It owns the configuration, the registry and the collaborator services,
//! and runs every install, uninstall and toggle through them.
//!
//! Toggling and uninstalling come in two shapes: `enable`, `disable` and
//! `try_uninstall` return errors that say why nothing happened, while
//! `set_enabled` and `uninstall` log the reason and return `None` / `false`.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::archive::{ArchiveFetcher, HttpFetcher, NoFetcher};
use crate::audit::{self, AuditAction};
use crate::common::fs;
use crate::config::ManagerConfig;
use crate::domain::{InstallOutcome, ModuleSummary, ModulesOverview, group_by_license};
use crate::error::{self, Result};
use crate::installer::{InstallSource, Installer};
use crate::registry::{FileRegistry, ModuleFilter, ModuleHandle, ModuleRegistry};
use crate::services::{
    BackupService, CacheInvalidator, DependencyService, DirectoryBackup, ManifestDependencies,
    NoBackup, NoDependencies, NoopCacheInvalidator, PathCacheInvalidator,
};

/// Reason passed to the backup service before a module is deleted
const UNINSTALL_BACKUP_REASON: &str = "Before uninstall";

pub struct ModuleManager {
    config: ManagerConfig,
    registry: Box<dyn ModuleRegistry>,
    caches: Box<dyn CacheInvalidator>,
    dependencies: Box<dyn DependencyService>,
    backups: Box<dyn BackupService>,
    fetcher: Box<dyn ArchiveFetcher>,
}

impl ModuleManager {
    /// Manager over `registry` with every optional service switched off
    pub fn new(config: ManagerConfig, registry: impl ModuleRegistry + 'static) -> Self {
        Self {
            config,
            registry: Box::new(registry),
            caches: Box::new(NoopCacheInvalidator),
            dependencies: Box::new(NoDependencies),
            backups: Box::new(NoBackup),
            fetcher: Box::new(NoFetcher),
        }
    }

    /// Manager with the shipped adapters: a [`FileRegistry`] over the
    /// configured module tree, path-based cache clearing, manifest
    /// dependencies, directory backups and HTTP downloads
    pub fn open(config: ManagerConfig) -> Result<Self> {
        let registry = FileRegistry::open(config.modules_path(), config.statuses_path())?;
        let caches = PathCacheInvalidator::from_config(&config);
        let backups = DirectoryBackup::new(config.backups_path());
        let fetcher = HttpFetcher::new(Duration::from_secs(config.remote.timeout_secs))?;

        Ok(Self::new(config, registry)
            .with_caches(caches)
            .with_dependencies(ManifestDependencies)
            .with_backups(backups)
            .with_fetcher(fetcher))
    }

    pub fn with_caches(mut self, caches: impl CacheInvalidator + 'static) -> Self {
        self.caches = Box::new(caches);
        self
    }

    pub fn with_dependencies(mut self, dependencies: impl DependencyService + 'static) -> Self {
        self.dependencies = Box::new(dependencies);
        self
    }

    pub fn with_backups(mut self, backups: impl BackupService + 'static) -> Self {
        self.backups = Box::new(backups);
        self
    }

    pub fn with_fetcher(mut self, fetcher: impl ArchiveFetcher + 'static) -> Self {
        self.fetcher = Box::new(fetcher);
        self
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    pub fn registry(&self) -> &dyn ModuleRegistry {
        self.registry.as_ref()
    }

    /// Re-read the module tree
    pub fn rescan(&mut self) -> Result<()> {
        self.registry.scan()
    }

    // Install

    /// Install everything `source` provides
    pub fn install(&mut self, source: &InstallSource) -> InstallOutcome {
        let outcome = Installer::new(
            &self.config,
            self.registry.as_mut(),
            self.caches.as_ref(),
            self.fetcher.as_ref(),
        )
        .install(source);

        for module in outcome.installed() {
            audit::record(AuditAction::Install, &module.name, true, None);
        }
        for name in outcome.skipped() {
            audit::record(AuditAction::Install, name, false, Some("skipped"));
        }
        if outcome.is_empty() {
            let source = source.to_string();
            audit::record(AuditAction::Install, &source, false, Some("nothing installed"));
        }

        outcome
    }

    /// Install from a ZIP archive; relative paths are resolved against the
    /// upload directory
    pub fn install_from_zip(&mut self, path: impl Into<PathBuf>, absolute: bool) -> InstallOutcome {
        self.install(&InstallSource::Archive {
            path: path.into(),
            absolute,
        })
    }

    /// Install from a remote repository (`owner/repo` or URL)
    pub fn install_from_github(&mut self, reference: &str, branch: Option<&str>) -> InstallOutcome {
        self.install(&InstallSource::remote(reference, branch))
    }

    /// Install a copy of a module directory
    pub fn install_from_path(&mut self, path: impl Into<PathBuf>) -> InstallOutcome {
        self.install(&InstallSource::local(path))
    }

    // Uninstall

    /// Whether `name` exists and may be removed
    pub fn can_uninstall(&self, name: &str) -> bool {
        self.check_uninstall(name).is_ok()
    }

    /// Remove a module, reporting why if it cannot be removed
    pub fn try_uninstall(&mut self, name: &str) -> Result<()> {
        let result = self.remove_module(name);
        match &result {
            Ok(()) => audit::record(AuditAction::Uninstall, name, true, None),
            Err(e) => audit::record(AuditAction::Uninstall, name, false, Some(&e.to_string())),
        }
        result
    }

    /// Remove a module; `false` if it is unknown, not removable, or the
    /// delete failed
    pub fn uninstall(&mut self, name: &str) -> bool {
        match self.try_uninstall(name) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(module = name, error = %e, "module cannot be uninstalled");
                false
            }
        }
    }

    fn check_uninstall(&self, name: &str) -> Result<&ModuleHandle> {
        let module = self
            .registry
            .find(name)
            .ok_or_else(|| error::module::not_found(name))?;
        if module.manifest().protected {
            return Err(error::module::protected(module.name()));
        }

        let dependents = self
            .dependencies
            .dependents(module.name(), self.registry.as_ref());
        if !dependents.is_empty() {
            return Err(error::module::has_dependents(module.name(), &dependents));
        }
        Ok(module)
    }

    fn remove_module(&mut self, name: &str) -> Result<()> {
        let module = self.check_uninstall(name)?.clone();

        if self.config.backups.enabled && self.config.backups.before_uninstall {
            if let Err(e) = self
                .backups
                .create_backup(&module, UNINSTALL_BACKUP_REASON)
            {
                tracing::warn!(
                    module = module.name(),
                    error = %e,
                    "backup before uninstall failed, continuing"
                );
            }
        }

        fs::remove_dir(module.path()).map_err(|e| error::fs::write_failed(module.path(), e))?;
        tracing::info!(
            module = module.name(),
            path = %module.path().display(),
            "module uninstalled"
        );

        if let Err(e) = self.registry.scan() {
            tracing::warn!(error = %e, "registry scan failed after uninstall");
        }
        self.caches.clear_all();
        Ok(())
    }

    // Enable / disable

    /// Whether `name` exists and may be disabled
    pub fn can_disable(&self, name: &str) -> bool {
        self.check_disable(name).is_ok()
    }

    pub fn enable(&mut self, name: &str) -> Result<ModuleSummary> {
        self.toggle(name, true)
    }

    pub fn disable(&mut self, name: &str) -> Result<ModuleSummary> {
        self.toggle(name, false)
    }

    /// Enable or disable `name`; `None` if it is unknown or may not be disabled
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Option<ModuleSummary> {
        match self.toggle(name, enabled) {
            Ok(summary) => Some(summary),
            Err(e) => {
                tracing::warn!(module = name, enabled, error = %e, "module state not changed");
                None
            }
        }
    }

    fn toggle(&mut self, name: &str, enabled: bool) -> Result<ModuleSummary> {
        let action = if enabled {
            AuditAction::Enable
        } else {
            AuditAction::Disable
        };

        let result = self.apply_toggle(name, enabled);
        match &result {
            Ok(summary) => audit::record(action, &summary.name, true, None),
            Err(e) => audit::record(action, name, false, Some(&e.to_string())),
        }
        result
    }

    fn apply_toggle(&mut self, name: &str, enabled: bool) -> Result<ModuleSummary> {
        let canonical = if enabled {
            self.registry
                .find(name)
                .ok_or_else(|| error::module::not_found(name))?
                .name()
                .to_string()
        } else {
            self.check_disable(name)?.name().to_string()
        };

        if enabled {
            self.registry.enable(&canonical)?;
        } else {
            self.registry.disable(&canonical)?;
        }
        self.caches.clear_all();

        self.registry
            .find(&canonical)
            .map(ModuleHandle::summary)
            .ok_or_else(|| error::module::not_found(&canonical))
    }

    fn check_disable(&self, name: &str) -> Result<&ModuleHandle> {
        let module = self
            .registry
            .find(name)
            .ok_or_else(|| error::module::not_found(name))?;
        if module.manifest().protected {
            return Err(error::module::protected(module.name()));
        }

        let dependents = self
            .dependencies
            .enabled_dependents(module.name(), self.registry.as_ref());
        if !dependents.is_empty() {
            return Err(error::module::has_dependents(module.name(), &dependents));
        }
        Ok(module)
    }

    // Listing

    /// Modules matching `filter`, in name order
    pub fn list(&self, filter: &ModuleFilter) -> Vec<ModuleSummary> {
        self.registry
            .modules()
            .into_iter()
            .filter(|module| filter.matches(module))
            .map(ModuleHandle::summary)
            .collect()
    }

    /// Total, active and inactive counts
    pub fn overview(&self) -> ModulesOverview {
        ModulesOverview::from_summaries(&self.list(&ModuleFilter::default()))
    }

    /// Modules matching `filter`, grouped by license
    pub fn grouped_by_license(
        &self,
        filter: &ModuleFilter,
    ) -> BTreeMap<Option<String>, Vec<ModuleSummary>> {
        group_by_license(self.list(filter))
    }
}
