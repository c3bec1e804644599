//! Enable and disable commands

use console::Style;

use crate::cli::ToggleArgs;
use modman::config::ManagerConfig;
use modman::error::Result;
use modman::manager::ModuleManager;

pub fn enable(config: ManagerConfig, args: ToggleArgs) -> Result<()> {
    run(config, args, true)
}

pub fn disable(config: ManagerConfig, args: ToggleArgs) -> Result<()> {
    run(config, args, false)
}

fn run(config: ManagerConfig, args: ToggleArgs, enabled: bool) -> Result<()> {
    let mut manager = ModuleManager::open(config)?;
    let summary = if enabled {
        manager.enable(&args.name)?
    } else {
        manager.disable(&args.name)?
    };

    let label = if enabled { "Enabled" } else { "Disabled" };
    println!(
        "{} {}",
        Style::new().green().bold().apply_to(label),
        Style::new().bold().yellow().apply_to(&summary.name)
    );
    Ok(())
}
