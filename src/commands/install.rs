//! Install command implementation
//!
//! Maps the CLI source to an [`InstallSource`], runs the install behind a
//! spinner and prints what was installed and what was skipped.

use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::{InstallArgs, InstallSourceArgs};
use crate::progress::Spinner;
use modman::common::fs;
use modman::config::ManagerConfig;
use modman::domain::InstallOutcome;
use modman::error::{self, Result};
use modman::installer::InstallSource;
use modman::manager::ModuleManager;

/// Run install command
pub fn run(config: ManagerConfig, args: InstallArgs) -> Result<()> {
    let mut manager = ModuleManager::open(config)?;

    let mut upload = None;
    let source = match args.source {
        InstallSourceArgs::Zip { file } => {
            let copy = copy_to_upload_dir(manager.config(), &file)?;
            let source = InstallSource::archive(copy.path());
            upload = Some(copy);
            source
        }
        InstallSourceArgs::Github { repository, branch } => {
            InstallSource::remote(repository, branch.as_deref())
        }
        InstallSourceArgs::Path { path } => InstallSource::local(absolute(&path)?),
    };

    let spinner = Spinner::start(format!("Installing from {source}..."));
    let outcome = manager.install(&source);
    spinner.finish();
    drop(upload);

    if outcome.is_empty() {
        return Err(error::install::nothing_installed(&source));
    }
    print_outcome(&outcome);
    Ok(())
}

/// Archive copy in the upload temp directory, removed on drop
///
/// The installer normally consumes the copy itself. Dropping the guard
/// covers every path where it does not get that far.
struct UploadedCopy {
    path: PathBuf,
}

impl UploadedCopy {
    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for UploadedCopy {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to remove uploaded archive copy"
            );
        }
    }
}

/// Copy the archive into the upload temp directory; the installer consumes
/// (deletes) the copy, never the operator's file
fn copy_to_upload_dir(config: &ManagerConfig, file: &Path) -> Result<UploadedCopy> {
    if !file.is_file() {
        return Err(error::archive::not_found(file));
    }

    let upload_dir = config.upload_temp_path();
    fs::ensure_dir(&upload_dir).map_err(|e| error::fs::write_failed(&upload_dir, e))?;

    let stem = file
        .file_stem()
        .map(|s| format!("{}-", s.to_string_lossy()))
        .unwrap_or_default();
    let (_, path) = tempfile::Builder::new()
        .prefix(&stem)
        .suffix(".zip")
        .tempfile_in(&upload_dir)
        .and_then(|temp| temp.keep().map_err(|e| e.error))
        .map_err(|e| error::fs::write_failed(&upload_dir, e))?;
    let copy = UploadedCopy { path };

    fs::copy_file(file, copy.path()).map_err(|e| error::fs::write_failed(copy.path(), e))?;
    tracing::debug!(from = %file.display(), to = %copy.path().display(), "archive copied for install");
    Ok(copy)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir()
        .map_err(|e| error::fs::io_error(format!("Failed to get current directory: {e}")))?;
    Ok(cwd.join(path))
}

fn print_outcome(outcome: &InstallOutcome) {
    for module in outcome.installed() {
        let state = if module.active { "enabled" } else { "not registered" };
        println!(
            "{} {} {}",
            Style::new().green().bold().apply_to("Installed"),
            Style::new().bold().yellow().apply_to(&module.name),
            Style::new().dim().apply_to(format!("({state})"))
        );
    }
    for name in outcome.skipped() {
        println!(
            "{} {}",
            Style::new().yellow().bold().apply_to("Skipped"),
            Style::new().bold().apply_to(name)
        );
    }
    if outcome.has_skipped() {
        println!();
        println!("Skipped modules already exist or are not valid modules.");
    }
}
