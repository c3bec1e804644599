//! Where an install comes from

use std::fmt;
use std::path::PathBuf;

/// Input to one install call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallSource {
    /// ZIP archive; a non-absolute path is resolved against the upload directory
    Archive { path: PathBuf, absolute: bool },

    /// Remote repository (`owner/repo` or URL); `None` uses the configured
    /// default branch
    RemoteRepository {
        reference: String,
        branch: Option<String>,
    },

    /// Module directory (or single file) already on disk; copied, never moved
    LocalPath { path: PathBuf },
}

impl InstallSource {
    /// Archive path relative to the upload directory
    pub fn uploaded_archive(path: impl Into<PathBuf>) -> Self {
        Self::Archive {
            path: path.into(),
            absolute: false,
        }
    }

    /// Archive at an absolute path
    pub fn archive(path: impl Into<PathBuf>) -> Self {
        Self::Archive {
            path: path.into(),
            absolute: true,
        }
    }

    pub fn remote(reference: impl Into<String>, branch: Option<&str>) -> Self {
        Self::RemoteRepository {
            reference: reference.into(),
            branch: branch.map(str::to_string),
        }
    }

    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::LocalPath { path: path.into() }
    }
}

impl fmt::Display for InstallSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Archive { path, .. } => write!(f, "archive {}", path.display()),
            Self::RemoteRepository {
                reference,
                branch: Some(branch),
            } => write!(f, "repository {reference}@{branch}"),
            Self::RemoteRepository { reference, .. } => write!(f, "repository {reference}"),
            Self::LocalPath { path } => write!(f, "path {}", path.display()),
        }
    }
}
