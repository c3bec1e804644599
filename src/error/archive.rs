//! Archive staging and extraction errors

use std::path::Path;

use super::ModmanError;

/// Creates an archive not found error
pub fn not_found(path: &Path) -> ModmanError {
    ModmanError::ArchiveNotFound {
        path: path.display().to_string(),
    }
}

/// Creates an archive open error
pub fn open_failed(path: &Path, reason: impl ToString) -> ModmanError {
    ModmanError::ArchiveOpenFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an unsafe entry error
pub fn unsafe_entry(entry: impl Into<String>) -> ModmanError {
    ModmanError::UnsafeArchiveEntry {
        entry: entry.into(),
    }
}

/// Creates an extraction failure error
pub fn extraction_failed(path: &Path, reason: impl ToString) -> ModmanError {
    ModmanError::ExtractionFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an oversize archive error
pub fn too_large(path: &Path, size: u64, limit: u64) -> ModmanError {
    ModmanError::ArchiveTooLarge {
        path: path.display().to_string(),
        size,
        limit,
    }
}

/// Creates an empty archive error
pub fn empty(path: &Path) -> ModmanError {
    ModmanError::ArchiveEmpty {
        path: path.display().to_string(),
    }
}

/// Creates an error for an archive whose entries expand past the limit
pub fn expands_too_large(path: &Path, size: u64, limit: u64) -> ModmanError {
    ModmanError::ArchiveExpandsTooLarge {
        path: path.display().to_string(),
        size,
        limit,
    }
}
