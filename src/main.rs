//! modman - module manager
//!
//! Command line front end over the `modman` library: installs modules from
//! archives, repositories and directories, and removes, toggles and lists them.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod progress;

use cli::{Cli, Commands};
use modman::error::{ModmanError, Result};

/// Environment variable holding the log filter
const LOG_ENV: &str = "MODMAN_LOG";

/// `MODMAN_LOG` wins; otherwise warnings, or debug output for `-v`
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "modman=debug" } else { "warn" })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    // Completions need no application root
    if let Commands::Completions(args) = cli.command {
        return commands::completions::run(args);
    }

    let config = commands::helpers::load_config(cli.base_path, cli.config.as_deref())?;
    match cli.command {
        Commands::Install(args) => commands::install::run(config, args),
        Commands::Uninstall(args) => commands::uninstall::run(config, args),
        Commands::Enable(args) => commands::toggle::enable(config, args),
        Commands::Disable(args) => commands::toggle::disable(config, args),
        Commands::List(args) => commands::list::run(config, args),
        Commands::Overview => commands::overview::run(config),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn report(error: &ModmanError) {
    eprintln!("Error: {error}");
    if let Some(help) = miette::Diagnostic::help(error) {
        eprintln!("  help: {help}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        report(&e);
        std::process::exit(1);
    }
}
