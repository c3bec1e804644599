//! Install results

use serde::Serialize;

use super::ModuleSummary;

/// What one install call did
///
/// Built once at the end of the call and never mutated afterwards. A name
/// appears in at most one of the two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallOutcome {
    installed: Vec<ModuleSummary>,
    skipped: Vec<String>,
}

impl InstallOutcome {
    pub fn new(installed: Vec<ModuleSummary>, skipped: Vec<String>) -> Self {
        Self { installed, skipped }
    }

    /// Outcome of a call that never reached the module tree
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn installed(&self) -> &[ModuleSummary] {
        &self.installed
    }

    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn has_installed(&self) -> bool {
        !self.installed.is_empty()
    }

    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Names of the installed modules, in install order
    pub fn installed_names(&self) -> Vec<&str> {
        self.installed.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_installed() && !self.has_skipped()
    }
}
