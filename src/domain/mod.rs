//! Domain models for modman
//!
//! This module contains pure domain objects: module snapshots and the
//! results reported by install operations.

pub mod module;
pub mod outcome;

pub use module::{ModuleAuthor, ModuleSummary, ModulesOverview, group_by_license};
pub use outcome::InstallOutcome;
