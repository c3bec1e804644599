//! Filters for listing modules

use serde_json::Value;

use super::ModuleHandle;

/// Criteria for `modman list`; every set field must match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleFilter {
    /// `Some(true)` for enabled modules only, `Some(false)` for disabled only
    pub active: Option<bool>,
    /// Exact name, case-insensitive
    pub name: Option<String>,
    /// Exact version
    pub version: Option<String>,
    /// Substring of the name or description, or one of the manifest keywords
    pub keyword: Option<String>,
}

impl ModuleFilter {
    pub fn active() -> Self {
        Self {
            active: Some(true),
            ..Self::default()
        }
    }

    pub fn inactive() -> Self {
        Self {
            active: Some(false),
            ..Self::default()
        }
    }

    pub fn matches(&self, module: &ModuleHandle) -> bool {
        if self.active.is_some_and(|active| module.is_enabled() != active) {
            return false;
        }
        if self
            .name
            .as_deref()
            .is_some_and(|name| !module.name().eq_ignore_ascii_case(name))
        {
            return false;
        }
        if self
            .version
            .as_deref()
            .is_some_and(|version| module.version().as_deref() != Some(version))
        {
            return false;
        }
        self.keyword
            .as_deref()
            .is_none_or(|keyword| matches_keyword(module, keyword))
    }
}

fn matches_keyword(module: &ModuleHandle, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    if module.lower_name().contains(&needle) {
        return true;
    }
    if module
        .manifest()
        .description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(&needle))
    {
        return true;
    }
    module
        .get("keywords")
        .and_then(Value::as_array)
        .is_some_and(|keywords| {
            keywords
                .iter()
                .filter_map(Value::as_str)
                .any(|k| k.eq_ignore_ascii_case(keyword))
        })
}
