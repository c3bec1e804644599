//! Audit trail of module state changes
//!
//! Events go to the `modman::audit` tracing target so they can be routed or
//! filtered separately, e.g. `MODMAN_LOG=warn,modman::audit=info`.

use std::fmt;

/// Tracing target of audit events
pub const AUDIT_TARGET: &str = "modman::audit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Install,
    Uninstall,
    Enable,
    Disable,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Uninstall => "uninstall",
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emit one audit event
pub fn record(action: AuditAction, module: &str, success: bool, reason: Option<&str>) {
    if success {
        tracing::info!(
            target: AUDIT_TARGET,
            action = action.as_str(),
            module,
            success,
            reason,
            "module {action} succeeded"
        );
    } else {
        tracing::warn!(
            target: AUDIT_TARGET,
            action = action.as_str(),
            module,
            success,
            reason,
            "module {action} failed"
        );
    }
}
