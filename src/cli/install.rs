use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install every module in an archive:\n    modman install zip ./modules.zip\n\n\
                   Install from GitHub:\n    modman install github owner/blog-module\n    \
                   modman install github https://github.com/owner/blog-module --branch dev\n\n\
                   Install a copy of a local directory:\n    modman install path ../shared/Blog")]
pub struct InstallArgs {
    #[command(subcommand)]
    pub source: InstallSourceArgs,
}

#[derive(Subcommand, Debug)]
pub enum InstallSourceArgs {
    /// Install every module in a ZIP archive (the file itself is kept)
    Zip {
        /// Archive to install from
        file: PathBuf,
    },

    /// Install a module from a repository branch archive
    Github {
        /// owner/repo, github.com/owner/repo or a full repository URL
        repository: String,

        /// Branch to download (defaults to the configured default branch)
        #[arg(long, short = 'b')]
        branch: Option<String>,
    },

    /// Install a copy of a local module directory or file
    Path {
        /// Directory (or single file) to copy into the module tree
        path: PathBuf,
    },
}
