use clap::Parser;

/// Arguments for the enable and disable commands
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Enable a module:\n    modman enable Blog\n\n\
                  Disable a module:\n    modman disable blog")]
pub struct ToggleArgs {
    /// Module name (case-insensitive)
    pub name: String,
}
