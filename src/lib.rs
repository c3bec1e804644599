//! modman - module manager
//!
//! Installs application modules from ZIP archives, remote repositories and
//! local directories into a live module tree, and removes, enables, disables
//! and lists them.
//!
//! ```ignore
//! use modman::{InstallSource, ManagerConfig, ModuleManager};
//!
//! let config = ManagerConfig::load(base_path, None)?;
//! let mut manager = ModuleManager::open(config)?;
//!
//! let outcome = manager.install(&InstallSource::archive("/tmp/blog.zip"));
//! for module in outcome.installed() {
//!     println!("installed {}", module.name);
//! }
//! ```

pub mod archive;
pub mod audit;
pub mod common;
pub mod config;
pub mod domain;
pub mod error;
pub mod installer;
pub mod manager;
pub mod manifest;
pub mod registry;
pub mod services;

#[cfg(test)]
mod test_fixtures;

pub use config::ManagerConfig;
pub use domain::{InstallOutcome, ModuleSummary, ModulesOverview};
pub use error::{ModmanError, Result};
pub use installer::{InstallSource, Installer};
pub use manager::ModuleManager;
pub use registry::{FileRegistry, ModuleFilter, ModuleRegistry};
