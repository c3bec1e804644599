//! Install outcome errors

use std::path::Path;

use super::ModmanError;

/// Creates an error for an install call that neither installed nor skipped anything
pub fn nothing_installed(source: impl ToString) -> ModmanError {
    ModmanError::NothingInstalled {
        source_desc: source.to_string(),
    }
}

/// Creates an error for a local source that contains the module tree
pub fn source_contains_modules(source: &Path, modules: &Path) -> ModmanError {
    ModmanError::SourceContainsModules {
        source_path: source.display().to_string(),
        modules_path: modules.display().to_string(),
    }
}
