//! Configuration errors

use std::path::Path;

use super::ModmanError;

/// Creates a config parse failed error
pub fn parse_failed(path: &Path, reason: impl ToString) -> ModmanError {
    ModmanError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> ModmanError {
    ModmanError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
