//! File system errors

use std::path::Path;

use super::ModmanError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> ModmanError {
    ModmanError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read error from an IO failure
pub fn read_failed(path: &Path, err: impl ToString) -> ModmanError {
    ModmanError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error from an IO failure
pub fn write_failed(path: &Path, err: impl ToString) -> ModmanError {
    ModmanError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ModmanError {
    ModmanError::IoError {
        message: message.into(),
    }
}
