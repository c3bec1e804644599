use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall a module:\n    modman uninstall Blog\n\n\
                  Uninstall without confirmation:\n    modman uninstall Blog -y")]
pub struct UninstallArgs {
    /// Module name (case-insensitive)
    pub name: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
