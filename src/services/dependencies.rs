//! Dependents lookup used by the disable and uninstall checks

use crate::registry::{ModuleHandle, ModuleRegistry};

/// Reports which modules depend on a given module
pub trait DependencyService {
    /// Names of the modules that require `name`
    fn dependents(&self, name: &str, registry: &dyn ModuleRegistry) -> Vec<String>;

    /// Dependents that are currently enabled
    fn enabled_dependents(&self, name: &str, registry: &dyn ModuleRegistry) -> Vec<String> {
        self.dependents(name, registry)
            .into_iter()
            .filter(|dependent| registry.find(dependent).is_some_and(ModuleHandle::is_enabled))
            .collect()
    }
}

/// Nothing depends on anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDependencies;

impl DependencyService for NoDependencies {
    fn dependents(&self, _name: &str, _registry: &dyn ModuleRegistry) -> Vec<String> {
        Vec::new()
    }
}

/// Direct dependents declared through the manifest `requires` list
#[derive(Debug, Default, Clone, Copy)]
pub struct ManifestDependencies;

impl DependencyService for ManifestDependencies {
    fn dependents(&self, name: &str, registry: &dyn ModuleRegistry) -> Vec<String> {
        registry
            .modules()
            .into_iter()
            .filter(|module| !module.name().eq_ignore_ascii_case(name))
            .filter(|module| {
                module
                    .manifest()
                    .requires
                    .iter()
                    .any(|required| required.eq_ignore_ascii_case(name))
            })
            .map(|module| module.name().to_string())
            .collect()
    }
}
