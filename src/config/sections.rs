//! Configuration sections of `modman.yaml`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default upload size limit (20 MiB)
pub const DEFAULT_MAX_UPLOAD_SIZE: u64 = 20 * 1024 * 1024;

/// Default limit on the total uncompressed size of an archive (100 MiB)
pub const DEFAULT_MAX_EXTRACTED_SIZE: u64 = 100 * 1024 * 1024;

/// Where uploaded archives are kept before installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Directory relative archive paths are resolved against
    pub directory: PathBuf,

    /// Subdirectory of `directory` that receives archives copied in by the CLI
    pub temp_directory: PathBuf,

    /// Largest archive accepted, in bytes
    pub max_size: u64,

    /// Largest total uncompressed size of an archive's entries, in bytes
    pub max_extracted_size: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("storage/app/public"),
            temp_directory: PathBuf::from("temp/modules"),
            max_size: DEFAULT_MAX_UPLOAD_SIZE,
            max_extracted_size: DEFAULT_MAX_EXTRACTED_SIZE,
        }
    }
}

/// Remote repository fetch settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Host prepended to `owner/repo` references
    pub host: String,

    /// Branch used when none is given
    pub default_branch: String,

    /// Branch tried once after the requested branch fails
    pub fallback_branch: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "https://github.com".to_string(),
            default_branch: "main".to_string(),
            fallback_branch: "master".to_string(),
            timeout_secs: 30,
        }
    }
}

/// What makes a directory count as a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Package manifest file names accepted at the module root
    pub package_manifests: Vec<String>,

    /// Source file extensions (without the dot) searched for recursively
    pub source_extensions: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            package_manifests: vec!["composer.json".to_string(), "package.json".to_string()],
            source_extensions: vec!["php".to_string()],
        }
    }
}

/// Backups taken before destructive operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    pub enabled: bool,
    pub before_uninstall: bool,
    pub directory: PathBuf,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            before_uninstall: true,
            directory: PathBuf::from("storage/app/module-backups"),
        }
    }
}

/// Derived cache locations cleared after the module set changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub config: Vec<PathBuf>,
    pub route: Vec<PathBuf>,
    pub generic: Vec<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            config: vec![PathBuf::from("bootstrap/cache/config.php")],
            route: vec![PathBuf::from("bootstrap/cache/routes-v7.php")],
            generic: vec![PathBuf::from("storage/framework/cache/data")],
        }
    }
}
