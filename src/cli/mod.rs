//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - toggle: Enable and disable command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod toggle;
pub mod uninstall;

pub use completions::CompletionsArgs;
pub use install::{InstallArgs, InstallSourceArgs};
pub use list::ListArgs;
pub use toggle::ToggleArgs;
pub use uninstall::UninstallArgs;

/// modman - module manager
///
/// Install, remove and toggle application modules.
#[derive(Parser, Debug)]
#[command(
    name = "modman",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install, uninstall and toggle application modules",
    long_about = "modman manages the module tree of an application: it installs modules \
                  from ZIP archives, remote repositories and local directories, removes \
                  them, and switches them on and off.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  modman install zip ./blog.zip          \x1b[90m# Install modules from an archive\x1b[0m\n   \
                  modman install github owner/blog       \x1b[90m# Install from a repository\x1b[0m\n   \
                  modman install path ../shared/Blog     \x1b[90m# Install a copy of a directory\x1b[0m\n   \
                  modman disable Blog                    \x1b[90m# Disable a module\x1b[0m\n   \
                  modman uninstall Blog -y               \x1b[90m# Remove a module\x1b[0m\n   \
                  modman list --active                   \x1b[90m# List enabled modules\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Application root (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "MODMAN_BASE_PATH")]
    pub base_path: Option<PathBuf>,

    /// Configuration file (defaults to <base>/modman.yaml)
    #[arg(long, short = 'c', global = true, env = "MODMAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install modules
    Install(InstallArgs),

    /// Remove a module
    Uninstall(UninstallArgs),

    /// Enable a module
    Enable(ToggleArgs),

    /// Disable a module
    Disable(ToggleArgs),

    /// List installed modules
    List(ListArgs),

    /// Show module counts
    Overview,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
