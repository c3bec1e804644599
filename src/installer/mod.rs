//! Module installation from archives, remote repositories and local paths
//!
//! Every source is reduced to a list of [`CandidateEntry`]s which are then
//! reconciled against the live module tree:
//! - an entry whose target directory already exists is skipped, untouched
//! - an accepted entry is moved (or copied, for local paths) into place
//! - a placed entry that does not look like a module is removed and skipped
//!
//! Install calls never fail. Anything that goes wrong before the module tree
//! is touched yields an empty [`InstallOutcome`]; an error while placing
//! entries stops the loop but keeps what was already placed.

pub mod candidate;
pub mod source;
pub mod staging;
pub mod validation;


use std::collections::HashSet;
use std::io;
use std::path::Path;

pub use candidate::CandidateEntry;
pub use source::InstallSource;
pub use staging::Staging;
pub use validation::is_valid_module;

use crate::archive::{ArchiveFetcher, extract_safely, fetch};
use crate::common::fs;
use crate::config::ManagerConfig;
use crate::domain::{InstallOutcome, ModuleSummary};
use crate::error::{self, Result};
use crate::manifest;
use crate::registry::ModuleRegistry;
use crate::services::CacheInvalidator;

/// File name remote archives are downloaded to
const REMOTE_ARCHIVE_FILE: &str = "repo.zip";

/// How an accepted entry reaches the module tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transfer {
    Move,
    Copy,
}

/// Names decided by the placement loop
#[derive(Debug, Default)]
struct Placement {
    installed: Vec<String>,
    skipped: Vec<String>,
    /// Whether anything under the module tree was created or removed
    mutated: bool,
}

/// Installs modules into the live module tree
pub struct Installer<'a> {
    config: &'a ManagerConfig,
    registry: &'a mut dyn ModuleRegistry,
    caches: &'a dyn CacheInvalidator,
    fetcher: &'a dyn ArchiveFetcher,
}

impl<'a> Installer<'a> {
    pub fn new(
        config: &'a ManagerConfig,
        registry: &'a mut dyn ModuleRegistry,
        caches: &'a dyn CacheInvalidator,
        fetcher: &'a dyn ArchiveFetcher,
    ) -> Self {
        Self {
            config,
            registry,
            caches,
            fetcher,
        }
    }

    /// Install everything `source` provides
    pub fn install(&mut self, source: &InstallSource) -> InstallOutcome {
        tracing::info!(source = %source, "installing modules");
        match source {
            InstallSource::Archive { path, absolute } => {
                let path = if *absolute {
                    path.clone()
                } else {
                    self.config.upload_path().join(path)
                };
                self.install_archive(&path)
            }
            InstallSource::RemoteRepository { reference, branch } => {
                self.install_remote(reference, branch.as_deref())
            }
            InstallSource::LocalPath { path } => self.install_local(path),
        }
    }

    fn install_archive(&mut self, archive: &Path) -> InstallOutcome {
        if !archive.is_file() {
            let e = error::archive::not_found(archive);
            tracing::error!(error = %e, "install aborted");
            return InstallOutcome::empty();
        }

        // From here on the archive is consumed whatever happens
        let mut staging = Staging::new(self.config.staging_path());
        staging.track_file(archive);

        let entries = match self.stage_archive(archive, &staging) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(archive = %archive.display(), error = %e, "install aborted");
                return InstallOutcome::empty();
            }
        };

        let placement = self.place_entries(&entries, Transfer::Move);
        let mutated = placement.mutated;
        let outcome = self.register(placement);

        staging.cleanup();
        if mutated {
            self.caches.clear_all();
        }
        outcome
    }

    fn stage_archive(&self, archive: &Path, staging: &Staging) -> Result<Vec<CandidateEntry>> {
        check_size(archive, self.config.upload.max_size)?;
        staging.prepare()?;
        extract_safely(archive, staging.dir(), self.config.upload.max_extracted_size)?;

        let entries = candidate::enumerate(staging.dir())?;
        if entries.is_empty() {
            return Err(error::archive::empty(archive));
        }
        tracing::debug!(count = entries.len(), "staged archive entries");
        Ok(entries)
    }

    fn install_remote(&mut self, reference: &str, branch: Option<&str>) -> InstallOutcome {
        let remote = &self.config.remote;
        let repo_url = match fetch::normalize_reference(reference, &remote.host) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(error = %e, "install aborted");
                return InstallOutcome::empty();
            }
        };
        let branches = fetch::branch_candidates(
            branch.unwrap_or(remote.default_branch.as_str()),
            &remote.fallback_branch,
        );

        let download = Staging::new(self.config.download_path());
        let archive = download.dir().join(REMOTE_ARCHIVE_FILE);
        let downloaded = download.prepare().and_then(|()| {
            fetch::download_branch_archive(self.fetcher, &repo_url, &branches, &archive)
        });
        if let Err(e) = downloaded {
            tracing::error!(repository = %repo_url, error = %e, "install aborted");
            return InstallOutcome::empty();
        }

        self.install_archive(&archive)
    }

    fn install_local(&mut self, path: &Path) -> InstallOutcome {
        if !path.exists() {
            let e = error::fs::not_found(path);
            tracing::error!(error = %e, "install aborted");
            return InstallOutcome::empty();
        }

        let modules_path = self.config.modules_path();
        if fs::is_within(&modules_path, path) {
            let e = error::install::source_contains_modules(path, &modules_path);
            tracing::error!(error = %e, "install aborted");
            return InstallOutcome::empty();
        }

        let entry = CandidateEntry::from_path(path);
        let placement = self.place_entries(std::slice::from_ref(&entry), Transfer::Copy);
        let mutated = placement.mutated;
        let outcome = self.register(placement);

        if mutated {
            self.caches.clear_all();
        }
        outcome
    }

    /// Reconcile `entries` against the module tree, in order
    fn place_entries(&self, entries: &[CandidateEntry], transfer: Transfer) -> Placement {
        let mut placement = Placement::default();
        let modules_path = self.config.modules_path();
        if let Err(e) = fs::ensure_dir(&modules_path) {
            tracing::error!(
                path = %modules_path.display(),
                error = %e,
                "cannot create module tree"
            );
            return placement;
        }

        let mut decided = HashSet::new();
        for entry in entries {
            let name = entry.module_name();
            if !decided.insert(name.clone()) {
                tracing::warn!(
                    module = %name,
                    path = %entry.staged_path.display(),
                    "another entry already provided this module, ignoring"
                );
                continue;
            }

            let destination = modules_path.join(&name);
            if destination.exists() {
                tracing::debug!(module = %name, "module directory exists, skipping");
                placement.skipped.push(name);
                continue;
            }

            placement.mutated = true;
            if let Err(e) = transfer_entry(entry, &destination, transfer) {
                tracing::error!(
                    module = %name,
                    path = %entry.staged_path.display(),
                    error = %e,
                    "module installation failed, remaining entries not processed"
                );
                if let Err(e) = fs::remove_dir(&destination) {
                    tracing::error!(
                        module = %name,
                        path = %destination.display(),
                        error = %e,
                        "cannot remove partially installed module"
                    );
                }
                placement.skipped.push(name);
                break;
            }

            if is_valid_module(&destination, &self.config.validation) {
                tracing::debug!(module = %name, "module placed");
                placement.installed.push(name);
                continue;
            }

            tracing::warn!(module = %name, "not a valid module, removing");
            if let Err(e) = fs::remove_dir(&destination) {
                tracing::error!(
                    module = %name,
                    path = %destination.display(),
                    error = %e,
                    "cannot remove invalid module, remaining entries not processed"
                );
                placement.skipped.push(name);
                break;
            }
            placement.skipped.push(name);
        }

        placement
    }

    /// Rescan, enable and snapshot every installed name
    fn register(&mut self, placement: Placement) -> InstallOutcome {
        if let Err(e) = self.registry.scan() {
            tracing::warn!(error = %e, "registry scan failed after install");
        }

        let modules_path = self.config.modules_path();
        let mut installed = Vec::with_capacity(placement.installed.len());
        for name in &placement.installed {
            installed.push(self.summarize(name, &modules_path));
        }

        InstallOutcome::new(installed, placement.skipped)
    }

    fn summarize(&mut self, name: &str, modules_path: &Path) -> ModuleSummary {
        if self.registry.has(name) {
            if let Err(e) = self.registry.enable(name) {
                tracing::warn!(module = name, error = %e, "could not enable installed module");
            }
            if let Some(handle) = self.registry.find(name) {
                return handle.summary();
            }
        }

        let path = modules_path.join(name);
        let display_name = manifest::declared_name(&path).unwrap_or_else(|| name.to_string());
        ModuleSummary::unregistered(display_name, path)
    }
}

fn transfer_entry(
    entry: &CandidateEntry,
    destination: &Path,
    transfer: Transfer,
) -> io::Result<()> {
    if entry.is_directory {
        return match transfer {
            Transfer::Move => fs::move_dir(&entry.staged_path, destination),
            Transfer::Copy => fs::copy_dir_recursive(&entry.staged_path, destination),
        };
    }

    // A loose file becomes the only file of a new module directory
    fs::ensure_dir(destination)?;
    let target = destination.join(&entry.raw_name);
    match transfer {
        Transfer::Move => fs::move_file(&entry.staged_path, &target),
        Transfer::Copy => fs::copy_file(&entry.staged_path, &target),
    }
}

/// Reject archives above `limit` bytes; a limit of 0 disables the check
fn check_size(archive: &Path, limit: u64) -> Result<()> {
    if limit == 0 {
        return Ok(());
    }

    let size = std::fs::metadata(archive)
        .map_err(|e| error::fs::read_failed(archive, e))?
        .len();
    if size > limit {
        return Err(error::archive::too_large(archive, size, limit));
    }
    Ok(())
}
