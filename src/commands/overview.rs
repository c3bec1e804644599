//! Overview command: module counts

use console::Style;

use modman::config::ManagerConfig;
use modman::error::Result;
use modman::manager::ModuleManager;

pub fn run(config: ManagerConfig) -> Result<()> {
    let manager = ModuleManager::open(config)?;
    let overview = manager.overview();

    println!("{}", Style::new().bold().apply_to("Modules"));
    println!("  {:<10}{}", "Total:", overview.total);
    println!(
        "  {:<10}{}",
        "Active:",
        Style::new().green().apply_to(overview.active)
    );
    println!(
        "  {:<10}{}",
        "Inactive:",
        Style::new().dim().apply_to(overview.inactive)
    );
    Ok(())
}
