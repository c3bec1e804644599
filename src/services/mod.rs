//! Collaborator services the manager calls around module changes
//!
//! Each capability is a trait with a no-op implementation, so "service not
//! configured" is just another implementation rather than an `Option`.

pub mod backup;
pub mod cache;
pub mod dependencies;

pub use backup::{BackupService, DirectoryBackup, NoBackup};
pub use cache::{CacheInvalidator, NoopCacheInvalidator, PathCacheInvalidator};
pub use dependencies::{DependencyService, ManifestDependencies, NoDependencies};
