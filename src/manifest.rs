//! Module manifest (`module.json`) reading
//!
//! The manifest is optional. A missing file yields `None`; a malformed one is
//! logged and also yields `None`, so callers fall back to directory names.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::common::fs;

/// Manifest file name at a module's root
pub const MANIFEST_FILE: &str = "module.json";

/// The parts of `module.json` modman understands
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModuleManifest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub protected: bool,
    pub requires: Vec<String>,

    /// Every key of the file, for `ModuleHandle::get`
    #[serde(skip)]
    pub raw: Map<String, Value>,
}

impl ModuleManifest {
    /// Parse manifest JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let raw: Map<String, Value> = serde_json::from_str(json)?;
        let mut manifest: Self = serde_json::from_value(Value::Object(raw.clone()))?;
        manifest.raw = raw;
        Ok(manifest)
    }

    /// Raw value of a manifest key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Read the manifest at the root of `module_dir`
    pub fn read(module_dir: &Path) -> Option<Self> {
        let path = module_dir.join(MANIFEST_FILE);
        if !path.is_file() {
            return None;
        }

        let content = match fs::read_text(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read module.json");
                return None;
            }
        };

        match Self::from_json(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid module.json");
                None
            }
        }
    }

    /// The declared name, if present and non-empty
    pub fn declared_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Name declared by the manifest in `module_dir`, if any
pub fn declared_name(module_dir: &Path) -> Option<String> {
    ModuleManifest::read(module_dir).and_then(|m| m.declared_name().map(str::to_string))
}
