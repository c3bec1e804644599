//! Command line input errors

use super::ModmanError;

/// Creates an unsupported shell error
pub fn unsupported_shell(shell: impl Into<String>) -> ModmanError {
    ModmanError::UnsupportedShell {
        shell: shell.into(),
    }
}
