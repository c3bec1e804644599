//! Error types and handling for modman
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`module`]: Module registry and eligibility errors
//! - [`install`]: Install outcome errors
//! - [`archive`]: Archive staging and extraction errors
//! - [`cli`]: Command line input errors
//! - [`remote`]: Remote repository fetch errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod archive;
pub mod cli;
pub mod config;
pub mod fs;
pub mod install;
pub mod module;
pub mod remote;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for modman operations
#[derive(Error, Diagnostic, Debug)]
pub enum ModmanError {
    // Module errors
    #[error("Module '{name}' not found")]
    #[diagnostic(
        code(modman::module::not_found),
        help("Run 'modman list' to see the modules known to the registry")
    )]
    ModuleNotFound { name: String },

    #[error("Module '{name}' is protected")]
    #[diagnostic(
        code(modman::module::protected),
        help("Remove \"protected\": true from the module's module.json to allow this")
    )]
    ModuleProtected { name: String },

    #[error("Module '{name}' is required by: {dependents}")]
    #[diagnostic(
        code(modman::module::has_dependents),
        help("Disable or uninstall the dependent modules first")
    )]
    ModuleHasDependents { name: String, dependents: String },

    // Archive errors
    #[error("Archive not found: {path}")]
    #[diagnostic(code(modman::archive::not_found))]
    ArchiveNotFound { path: String },

    #[error("Cannot open archive {path}: {reason}")]
    #[diagnostic(code(modman::archive::open_failed))]
    ArchiveOpenFailed { path: String, reason: String },

    #[error("Archive {path} is {size} bytes, limit is {limit}")]
    #[diagnostic(
        code(modman::archive::too_large),
        help("Raise upload.max_size in modman.yaml")
    )]
    ArchiveTooLarge { path: String, size: u64, limit: u64 },

    #[error("Archive {path} expands to {size} bytes, limit is {limit}")]
    #[diagnostic(
        code(modman::archive::expands_too_large),
        help("Raise upload.max_extracted_size in modman.yaml")
    )]
    ArchiveExpandsTooLarge { path: String, size: u64, limit: u64 },

    #[error("Archive contains unsafe entry name: {entry}")]
    #[diagnostic(
        code(modman::archive::unsafe_entry),
        help("Entry names must not contain '..', './' or backslashes")
    )]
    UnsafeArchiveEntry { entry: String },

    #[error("Archive is empty after extraction: {path}")]
    #[diagnostic(code(modman::archive::empty))]
    ArchiveEmpty { path: String },

    #[error("Failed to extract archive {path}: {reason}")]
    #[diagnostic(code(modman::archive::extraction_failed))]
    ExtractionFailed { path: String, reason: String },

    // Install errors
    #[error("Nothing was installed from {source_desc}")]
    #[diagnostic(
        code(modman::install::nothing_installed),
        help("Run with -v or MODMAN_LOG=debug to see why the source was rejected")
    )]
    NothingInstalled { source_desc: String },

    #[error("Cannot install {source_path}: it contains the module tree {modules_path}")]
    #[diagnostic(
        code(modman::install::source_contains_modules),
        help("Install the module directory itself, not a directory above the module tree")
    )]
    SourceContainsModules {
        source_path: String,
        modules_path: String,
    },

    // CLI input errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(modman::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Remote errors
    #[error("Failed to fetch {url}: {reason}")]
    #[diagnostic(code(modman::remote::fetch_failed))]
    FetchFailed { url: String, reason: String },

    #[error("Invalid repository reference: {reference}")]
    #[diagnostic(
        code(modman::remote::invalid_reference),
        help("Valid formats: owner/repo, github.com/owner/repo, https://github.com/owner/repo")
    )]
    InvalidRepositoryReference { reference: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(modman::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(modman::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(modman::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(modman::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(modman::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(modman::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ModmanError {
    fn from(err: std::io::Error) -> Self {
        ModmanError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ModmanError {
    fn from(err: serde_yaml::Error) -> Self {
        ModmanError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ModmanError {
    fn from(err: inquire::InquireError) -> Self {
        ModmanError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ModmanError>;
