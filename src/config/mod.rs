//! Manager configuration (`modman.yaml`)
//!
//! Every path in the file is relative to the base path unless it is absolute.
//! Lookup order for the file itself:
//! 1. an explicit path (`--config` / `MODMAN_CONFIG`)
//! 2. `<base>/modman.yaml`
//! 3. `<user config dir>/modman/modman.yaml`
//! 4. built-in defaults

pub mod sections;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

pub use sections::{BackupConfig, CacheConfig, RemoteConfig, UploadConfig, ValidationConfig};

/// Configuration file name looked up in the base path
pub const CONFIG_FILE: &str = "modman.yaml";

/// Directory under the user's config dir holding the global configuration
const GLOBAL_CONFIG_DIR: &str = "modman";

/// Complete manager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Application root every relative path hangs off
    #[serde(skip)]
    pub base_path: PathBuf,

    /// Live module tree
    pub modules_dir: PathBuf,

    /// JSON file holding each module's enabled flag
    pub statuses_file: PathBuf,

    /// Scratch directory archives are extracted into
    pub staging_dir: PathBuf,

    /// Scratch directory remote archives are downloaded into
    pub download_dir: PathBuf,

    pub upload: UploadConfig,
    pub remote: RemoteConfig,
    pub validation: ValidationConfig,
    pub backups: BackupConfig,
    pub cache: CacheConfig,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            modules_dir: PathBuf::from("Modules"),
            statuses_file: PathBuf::from("modules_statuses.json"),
            staging_dir: PathBuf::from("storage/app/temp_module_extract"),
            download_dir: PathBuf::from("storage/app/temp_github_module"),
            upload: UploadConfig::default(),
            remote: RemoteConfig::default(),
            validation: ValidationConfig::default(),
            backups: BackupConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl ManagerConfig {
    /// Default configuration rooted at `base_path`
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the configuration for `base_path`, following the lookup order above
    pub fn load(base_path: &Path, explicit: Option<&Path>) -> Result<Self> {
        let base_path = dunce::canonicalize(base_path).unwrap_or_else(|_| base_path.to_path_buf());

        let file = match explicit {
            Some(path) if !path.is_file() => return Err(error::fs::not_found(path)),
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(&base_path),
        };

        let mut config = match file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                let yaml = std::fs::read_to_string(&path)
                    .map_err(|e| error::config::read_failed(&path, e))?;
                Self::from_yaml(&yaml).map_err(|e| error::config::parse_failed(&path, e))?
            }
            None => Self::default(),
        };

        config.base_path = base_path;
        Ok(config)
    }

    fn discover(base_path: &Path) -> Option<PathBuf> {
        let local = base_path.join(CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join(GLOBAL_CONFIG_DIR).join(CONFIG_FILE))
            .filter(|path| path.is_file())
    }

    /// Resolve a configured path against the base path
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    pub fn modules_path(&self) -> PathBuf {
        self.resolve(&self.modules_dir)
    }

    pub fn statuses_path(&self) -> PathBuf {
        self.resolve(&self.statuses_file)
    }

    pub fn staging_path(&self) -> PathBuf {
        self.resolve(&self.staging_dir)
    }

    pub fn download_path(&self) -> PathBuf {
        self.resolve(&self.download_dir)
    }

    pub fn upload_path(&self) -> PathBuf {
        self.resolve(&self.upload.directory)
    }

    /// Directory the CLI copies archives into before installing them
    pub fn upload_temp_path(&self) -> PathBuf {
        self.upload_path().join(&self.upload.temp_directory)
    }

    pub fn backups_path(&self) -> PathBuf {
        self.resolve(&self.backups.directory)
    }

    /// Path of the module directory called `name`
    pub fn module_path(&self, name: &str) -> PathBuf {
        self.modules_path().join(name)
    }
}
