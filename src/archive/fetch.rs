//! Remote repository archives
//!
//! A repository reference (`owner/repo`, `github.com/owner/repo` or a full
//! URL) is turned into a branch archive URL of the form
//! `<repo>/archive/refs/heads/<branch>.zip`. The requested branch is tried
//! first, then the fallback branch, and nothing else.

use std::path::Path;
use std::time::Duration;

use crate::error::{self, Result};

/// Downloads a URL to a local file
pub trait ArchiveFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Fetcher for managers without network access; every fetch fails
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFetcher;

impl ArchiveFetcher for NoFetcher {
    fn fetch(&self, url: &str, _dest: &Path) -> Result<()> {
        Err(error::remote::fetch_failed(url, "remote downloads are disabled"))
    }
}

/// Blocking HTTP fetcher with a per-request timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("modman/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| error::remote::fetch_failed("<client>", e))?;
        Ok(Self { client })
    }
}

impl ArchiveFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| error::remote::fetch_failed(url, e))?;
        let bytes = response
            .bytes()
            .map_err(|e| error::remote::fetch_failed(url, e))?;
        std::fs::write(dest, &bytes).map_err(|e| error::fs::write_failed(dest, e))
    }
}

/// Turn a repository reference into a fetchable repository URL
pub fn normalize_reference(reference: &str, host: &str) -> Result<String> {
    let trimmed = reference.trim().trim_end_matches('/');
    let trimmed = trimmed
        .strip_suffix(".git")
        .unwrap_or(trimmed)
        .trim_end_matches('/');

    if trimmed.is_empty() {
        return Err(error::remote::invalid_reference(reference));
    }

    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        return Ok(trimmed.to_string());
    }

    let host = host.trim_end_matches('/');
    let (scheme, domain) = host.split_once("://").unwrap_or(("https", host));
    if trimmed.starts_with(&format!("{domain}/")) {
        return Ok(format!("{scheme}://{trimmed}"));
    }

    Ok(format!("{host}/{}", trimmed.trim_start_matches('/')))
}

/// Archive URL of `branch` in the repository at `repo_url`
pub fn branch_archive_url(repo_url: &str, branch: &str) -> String {
    format!("{repo_url}/archive/refs/heads/{branch}.zip")
}

/// Branches to try, in order, without duplicates
pub fn branch_candidates(requested: &str, fallback: &str) -> Vec<String> {
    let mut branches = vec![requested.to_string()];
    if !fallback.is_empty() && fallback != requested {
        branches.push(fallback.to_string());
    }
    branches
}

/// Download the first branch archive that can be fetched into `dest`
///
/// Returns the branch that was downloaded.
pub fn download_branch_archive(
    fetcher: &dyn ArchiveFetcher,
    repo_url: &str,
    branches: &[String],
    dest: &Path,
) -> Result<String> {
    for branch in branches {
        let url = branch_archive_url(repo_url, branch);
        match fetcher.fetch(&url, dest) {
            Ok(()) => {
                tracing::info!(
                    repository = repo_url,
                    branch = %branch,
                    "downloaded repository archive"
                );
                return Ok(branch.clone());
            }
            Err(e) => {
                tracing::warn!(
                    repository = repo_url,
                    branch = %branch,
                    error = %e,
                    "branch download failed"
                );
            }
        }
    }

    Err(error::remote::fetch_failed(
        repo_url,
        format!("no branch could be downloaded (tried {})", branches.join(", ")),
    ))
}
