//! Module snapshots

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Point-in-time view of one module
///
/// This is a copy, not a live reference: it goes stale as soon as the
/// registry changes the module's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    /// Lowercased name
    pub alias: String,
    pub description: Option<String>,
    pub active: bool,
    pub path: PathBuf,
    pub version: Option<String>,
    pub authors: Vec<ModuleAuthor>,
    pub license: Option<String>,
}

/// One entry of a package manifest's `authors` list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl ModuleAuthor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for ModuleAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.homepage {
            Some(homepage) => write!(f, "{} ({homepage})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl ModuleSummary {
    /// Minimal summary for a module directory the registry could not read
    pub fn unregistered(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        Self {
            alias: name.to_lowercase(),
            name,
            description: None,
            active: false,
            path: path.into(),
            version: None,
            authors: Vec::new(),
            license: None,
        }
    }

    pub fn has_authors(&self) -> bool {
        !self.authors.is_empty()
    }

    pub fn first_author_name(&self) -> Option<&str> {
        self.authors.first().map(|author| author.name.as_str())
    }

    /// Authors joined for display, e.g. `Jane (https://jane.dev), Joe`
    pub fn authors_display(&self) -> String {
        self.authors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Group summaries by license, keeping each group in input order
///
/// Modules without a license land under `None`.
pub fn group_by_license(
    summaries: impl IntoIterator<Item = ModuleSummary>,
) -> BTreeMap<Option<String>, Vec<ModuleSummary>> {
    let mut groups: BTreeMap<Option<String>, Vec<ModuleSummary>> = BTreeMap::new();
    for summary in summaries {
        groups
            .entry(summary.license.clone())
            .or_default()
            .push(summary);
    }
    groups
}

/// Module counts shown by `modman overview`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModulesOverview {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl ModulesOverview {
    /// Count active and inactive modules among `summaries`
    pub fn from_summaries<'a>(summaries: impl IntoIterator<Item = &'a ModuleSummary>) -> Self {
        summaries
            .into_iter()
            .fold(Self::default(), |mut overview, summary| {
                overview.total += 1;
                if summary.active {
                    overview.active += 1;
                } else {
                    overview.inactive += 1;
                }
                overview
            })
    }
}
