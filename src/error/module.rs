//! Module registry and eligibility errors

use super::ModmanError;

/// Creates a module not found error
pub fn not_found(name: impl Into<String>) -> ModmanError {
    ModmanError::ModuleNotFound { name: name.into() }
}

/// Creates a protected module error
pub fn protected(name: impl Into<String>) -> ModmanError {
    ModmanError::ModuleProtected { name: name.into() }
}

/// Creates an error listing the modules that still depend on `name`
pub fn has_dependents(name: impl Into<String>, dependents: &[String]) -> ModmanError {
    ModmanError::ModuleHasDependents {
        name: name.into(),
        dependents: dependents.join(", "),
    }
}
