//! Module registry port
//!
//! The registry is the source of truth for which modules exist and whether
//! they are enabled. The installer only ever talks to it through
//! [`ModuleRegistry`]; [`FileRegistry`] is the adapter shipped for module
//! trees that keep their enabled flags in a JSON statuses file.

pub mod file;
pub mod handle;
pub mod query;

pub use file::FileRegistry;
pub use handle::ModuleHandle;
pub use query::ModuleFilter;

use crate::error::Result;

/// Operations modman needs from a module registry
pub trait ModuleRegistry {
    /// Look a module up by name (case-insensitive)
    fn find(&self, name: &str) -> Option<&ModuleHandle>;

    fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn enable(&mut self, name: &str) -> Result<()>;

    fn disable(&mut self, name: &str) -> Result<()>;

    /// Re-discover modules on disk
    fn scan(&mut self) -> Result<()>;

    /// Every known module, in name order
    fn modules(&self) -> Vec<&ModuleHandle>;
}
