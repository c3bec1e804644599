//! Registry view of one module

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::domain::{ModuleAuthor, ModuleSummary};
use crate::manifest::ModuleManifest;

/// Package manifest consulted for composer attributes
pub const COMPOSER_FILE: &str = "composer.json";

/// A module as the registry knows it
#[derive(Debug, Clone)]
pub struct ModuleHandle {
    name: String,
    path: PathBuf,
    enabled: bool,
    manifest: ModuleManifest,
    composer: Map<String, Value>,
}

impl ModuleHandle {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            enabled: false,
            manifest: ModuleManifest::default(),
            composer: Map::new(),
        }
    }

    /// Load the module in `dir`; `None` unless its manifest declares a name
    pub fn load(dir: &Path) -> Option<Self> {
        let manifest = ModuleManifest::read(dir)?;
        let name = manifest.declared_name()?.to_string();
        Some(Self {
            name,
            path: dir.to_path_buf(),
            enabled: false,
            composer: read_composer(dir),
            manifest,
        })
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_manifest(mut self, manifest: ModuleManifest) -> Self {
        self.manifest = manifest;
        self
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lower_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Raw manifest value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.manifest.get(key)
    }

    pub fn manifest(&self) -> &ModuleManifest {
        &self.manifest
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw `composer.json` value
    pub fn composer_attr(&self, key: &str) -> Option<&Value> {
        self.composer.get(key)
    }

    /// Version from `composer.json`, falling back to the manifest
    pub fn version(&self) -> Option<String> {
        self.composer_attr("version")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| self.manifest.version.clone())
    }

    /// Package or manifest attribute, package first
    fn attr(&self, key: &str) -> Option<&Value> {
        self.composer_attr(key).or_else(|| self.manifest.get(key))
    }

    /// Authors list; a bare string counts as one author
    pub fn authors(&self) -> Vec<ModuleAuthor> {
        match self.attr("authors") {
            Some(Value::Array(entries)) => entries.iter().filter_map(parse_author).collect(),
            Some(value) => parse_author(value).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// License identifier; several licenses are joined with ` OR `
    pub fn license(&self) -> Option<String> {
        match self.attr("license")? {
            Value::String(license) if !license.trim().is_empty() => Some(license.clone()),
            Value::Array(licenses) => {
                let names: Vec<&str> = licenses.iter().filter_map(Value::as_str).collect();
                (!names.is_empty()).then(|| names.join(" OR "))
            }
            _ => None,
        }
    }

    /// Snapshot for reporting
    pub fn summary(&self) -> ModuleSummary {
        ModuleSummary {
            name: self.name.clone(),
            alias: self.lower_name(),
            description: self.manifest.description.clone(),
            active: self.enabled,
            path: self.path.clone(),
            version: self.version(),
            authors: self.authors(),
            license: self.license(),
        }
    }
}

fn parse_author(value: &Value) -> Option<ModuleAuthor> {
    let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
    match value {
        Value::String(name) if !name.trim().is_empty() => Some(ModuleAuthor::named(name.as_str())),
        Value::Object(_) => Some(ModuleAuthor {
            name: text("name")?,
            email: text("email"),
            homepage: text("homepage").or_else(|| text("url")),
        }),
        _ => None,
    }
}

fn read_composer(dir: &Path) -> Map<String, Value> {
    let path = dir.join(COMPOSER_FILE);
    let Ok(content) = std::fs::read_to_string(&path) else {
        return Map::new();
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "invalid composer.json");
        Map::new()
    })
}
