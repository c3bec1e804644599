//! List command implementation
//!
//! This command lists installed modules with their state, and optionally
//! their version, description, authors, license and location. With
//! `--by-license` the listing is grouped under each license.

use std::collections::BTreeMap;

use console::Style;

use crate::cli::ListArgs;
use modman::config::ManagerConfig;
use modman::domain::ModuleSummary;
use modman::error::Result;
use modman::manager::ModuleManager;
use modman::registry::ModuleFilter;

/// Run list command
pub fn run(config: ManagerConfig, args: ListArgs) -> Result<()> {
    let manager = ModuleManager::open(config)?;
    let filter = filter_from_args(&args);
    if args.by_license {
        list_by_license(&manager.grouped_by_license(&filter), args.detailed);
    } else {
        list_modules(&manager.list(&filter), args.detailed);
    }
    Ok(())
}

fn filter_from_args(args: &ListArgs) -> ModuleFilter {
    let mut filter = if args.active {
        ModuleFilter::active()
    } else if args.inactive {
        ModuleFilter::inactive()
    } else {
        ModuleFilter::default()
    };
    filter.keyword = args.search.clone();
    filter
}

fn list_modules(modules: &[ModuleSummary], detailed: bool) {
    if modules.is_empty() {
        println!("No modules installed.");
        return;
    }

    println!("Installed modules ({}):", modules.len());
    println!();
    display_modules(modules, detailed);
}

fn list_by_license(groups: &BTreeMap<Option<String>, Vec<ModuleSummary>>, detailed: bool) {
    if groups.is_empty() {
        println!("No modules installed.");
        return;
    }

    for (license, modules) in groups {
        let license = license.as_deref().unwrap_or("No license");
        println!(
            "{} ({}):",
            Style::new().bold().apply_to(license),
            modules.len()
        );
        display_modules(modules, detailed);
        if !detailed {
            println!();
        }
    }
}

fn display_modules(modules: &[ModuleSummary], detailed: bool) {
    for module in modules {
        if detailed {
            display_module_detailed(module);
            println!();
        } else {
            display_module_simple(module);
        }
    }
}

fn state_label(active: bool) -> String {
    if active {
        Style::new().green().apply_to("enabled").to_string()
    } else {
        Style::new().dim().apply_to("disabled").to_string()
    }
}

fn display_module_simple(module: &ModuleSummary) {
    let version = module
        .version
        .as_deref()
        .map(|v| format!(" {}", Style::new().dim().apply_to(format!("v{v}"))))
        .unwrap_or_default();
    println!(
        "  {}{} [{}]",
        Style::new().bold().yellow().apply_to(&module.name),
        version,
        state_label(module.active)
    );
}

fn display_module_detailed(module: &ModuleSummary) {
    println!("  {}", Style::new().bold().yellow().apply_to(&module.name));
    println!(
        "    {} {}",
        Style::new().bold().apply_to("State:"),
        state_label(module.active)
    );
    if let Some(ref version) = module.version {
        println!("    {} {}", Style::new().bold().apply_to("Version:"), version);
    }
    if let Some(ref description) = module.description {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Description:"),
            description
        );
    }
    if module.has_authors() {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Authors:"),
            module.authors_display()
        );
    }
    if let Some(ref license) = module.license {
        println!("    {} {}", Style::new().bold().apply_to("License:"), license);
    }
    println!("    {} {}", Style::new().bold().apply_to("Alias:"), module.alias);
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Path:"),
        Style::new().dim().apply_to(module.path.display())
    );
}
