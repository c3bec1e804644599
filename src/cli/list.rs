use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all installed modules:\n    modman list\n\n\
                  List enabled modules only:\n    modman list --active\n\n\
                  Search names, descriptions and keywords:\n    modman list --search blog\n\n\
                  Show detailed information:\n    modman list --detailed\n\n\
                  Group modules by license:\n    modman list --by-license")]
pub struct ListArgs {
    /// Only enabled modules
    #[arg(long, conflicts_with = "inactive")]
    pub active: bool,

    /// Only disabled modules
    #[arg(long)]
    pub inactive: bool,

    /// Keyword matched against name, description and manifest keywords
    #[arg(long, short = 's', value_name = "KEYWORD")]
    pub search: Option<String>,

    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,

    /// Group modules under their license
    #[arg(long)]
    pub by_license: bool,
}
