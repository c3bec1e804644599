//! Uninstall command implementation

use console::Style;
use inquire::Confirm;

use crate::cli::UninstallArgs;
use modman::config::ManagerConfig;
use modman::domain::ModuleSummary;
use modman::error::{self, Result};
use modman::manager::ModuleManager;

/// Run uninstall command
pub fn run(config: ManagerConfig, args: UninstallArgs) -> Result<()> {
    let mut manager = ModuleManager::open(config)?;

    let module = manager
        .registry()
        .find(&args.name)
        .map(|handle| handle.summary())
        .ok_or_else(|| error::module::not_found(&args.name))?;

    if !args.yes && !confirm_uninstall(&module)? {
        println!("Uninstall cancelled.");
        return Ok(());
    }

    manager.try_uninstall(&module.name)?;
    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Uninstalled"),
        Style::new().bold().yellow().apply_to(&module.name)
    );
    Ok(())
}

/// Ask before deleting the module directory
fn confirm_uninstall(module: &ModuleSummary) -> Result<bool> {
    println!("\nThe following module will be removed:");
    println!("  - {}", module.name);
    println!("    {}", Style::new().dim().apply_to(module.path.display()));
    println!();

    let confirmed = Confirm::new("Proceed with uninstall?")
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?;
    Ok(confirmed)
}
