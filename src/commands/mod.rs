//! Command implementations for modman CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod overview;
pub mod toggle;
pub mod uninstall;
