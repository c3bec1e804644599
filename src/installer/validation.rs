//! What counts as a module directory

use std::path::Path;

use crate::common::fs;
use crate::config::ValidationConfig;
use crate::manifest::MANIFEST_FILE;

/// A directory is a module if it has a `module.json`, a package manifest,
/// or at least one source file anywhere below it
pub fn is_valid_module(dir: &Path, rules: &ValidationConfig) -> bool {
    if !dir.is_dir() {
        return false;
    }

    if dir.join(MANIFEST_FILE).is_file() {
        return true;
    }

    if rules
        .package_manifests
        .iter()
        .any(|manifest| dir.join(manifest).is_file())
    {
        return true;
    }

    fs::all_files(dir).any(|file| has_source_extension(&file, &rules.source_extensions))
}

fn has_source_extension(file: &Path, extensions: &[String]) -> bool {
    file.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}
