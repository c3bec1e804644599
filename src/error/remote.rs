//! Remote repository fetch errors

use super::ModmanError;

/// Creates a fetch failure error
pub fn fetch_failed(url: impl Into<String>, reason: impl ToString) -> ModmanError {
    ModmanError::FetchFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid repository reference error
pub fn invalid_reference(reference: impl Into<String>) -> ModmanError {
    ModmanError::InvalidRepositoryReference {
        reference: reference.into(),
    }
}
