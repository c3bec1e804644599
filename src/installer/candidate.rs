//! Top-level entries considered for installation

use std::path::{Path, PathBuf};

use crate::common::fs;
use crate::error::{self, Result};
use crate::manifest;

/// One top-level entry of a staged archive, or a local source path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEntry {
    /// File or directory name as found on disk
    pub raw_name: String,
    pub is_directory: bool,
    pub staged_path: PathBuf,
}

impl CandidateEntry {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let staged_path = path.into();
        let raw_name = staged_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            raw_name,
            is_directory: staged_path.is_dir(),
            staged_path,
        }
    }

    /// Directory name, or the file stem for a loose file
    pub fn initial_name(&self) -> String {
        if self.is_directory {
            return self.raw_name.clone();
        }
        Path::new(&self.raw_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.raw_name.clone())
    }

    /// Name the module will be installed under
    ///
    /// A directory's `module.json` `name` wins over the directory name,
    /// unless it could not be used as a single directory name.
    pub fn module_name(&self) -> String {
        let initial = self.initial_name();
        if !self.is_directory {
            return initial;
        }

        match manifest::declared_name(&self.staged_path) {
            Some(name) if is_usable_module_name(&name) => name,
            Some(name) => {
                tracing::warn!(
                    path = %self.staged_path.display(),
                    declared = %name,
                    fallback = %initial,
                    "module.json name is not a plain directory name"
                );
                initial
            }
            None => initial,
        }
    }
}

/// Whether `name` can be a directory name directly under the module tree
pub fn is_usable_module_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}

/// Top-level entries of `root`: directories first, then files, each in name order
pub fn enumerate(root: &Path) -> Result<Vec<CandidateEntry>> {
    let dirs = fs::directories(root).map_err(|e| error::fs::read_failed(root, e))?;
    let files = fs::files(root).map_err(|e| error::fs::read_failed(root, e))?;

    Ok(dirs
        .into_iter()
        .chain(files)
        .map(CandidateEntry::from_path)
        .collect())
}
