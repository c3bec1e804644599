//! ZIP extraction into the staging directory

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use zip::ZipArchive;

use crate::common::fs;
use crate::error::{self, Result};

use super::safety::find_unsafe_entry;

/// Extract `archive_path` into `target`, refusing the whole archive if any
/// entry name is unsafe or the entries expand to more than `max_extracted`
/// bytes (0 disables the size check)
///
/// `target` is expected to exist and be empty.
pub fn extract_safely(archive_path: &Path, target: &Path, max_extracted: u64) -> Result<()> {
    let file =
        File::open(archive_path).map_err(|e| error::archive::open_failed(archive_path, e))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| error::archive::open_failed(archive_path, e))?;

    if let Some(name) = find_unsafe_entry(archive.file_names()) {
        tracing::warn!(
            archive = %archive_path.display(),
            entry = name,
            "archive contains unsafe entry name"
        );
        return Err(error::archive::unsafe_entry(name));
    }

    // Catches what the name markers miss, e.g. drive prefixes
    let mut declared: u64 = 0;
    for index in 0..archive.len() {
        let entry = archive
            .by_index(index)
            .map_err(|e| error::archive::extraction_failed(archive_path, e))?;
        if entry.enclosed_name().is_none() {
            let name = entry.name().to_string();
            tracing::warn!(
                archive = %archive_path.display(),
                entry = %name,
                "archive entry escapes the target"
            );
            return Err(error::archive::unsafe_entry(name));
        }
        declared = declared.saturating_add(entry.size());
    }
    if max_extracted > 0 && declared > max_extracted {
        return Err(error::archive::expands_too_large(
            archive_path,
            declared,
            max_extracted,
        ));
    }

    let written = extract_entries(&mut archive, archive_path, target, max_extracted)?;

    tracing::debug!(
        archive = %archive_path.display(),
        target = %target.display(),
        entries = archive.len(),
        bytes = written,
        "archive extracted"
    );
    Ok(())
}

/// Write every entry below `target`, counting the bytes actually produced
///
/// Declared sizes come from the archive itself, so the running total is
/// enforced again while decompressing.
fn extract_entries(
    archive: &mut ZipArchive<File>,
    archive_path: &Path,
    target: &Path,
    max_extracted: u64,
) -> Result<u64> {
    let failed = |e: io::Error| error::archive::extraction_failed(archive_path, e);
    let mut written: u64 = 0;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| error::archive::extraction_failed(archive_path, e))?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(error::archive::unsafe_entry(entry.name()));
        };
        let out_path = target.join(relative);

        if entry.is_dir() {
            fs::ensure_dir(&out_path).map_err(failed)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::ensure_dir(parent).map_err(failed)?;
        }

        let mut out = File::create(&out_path).map_err(failed)?;
        let copy_result = if max_extracted > 0 {
            let remaining = max_extracted.saturating_sub(written);
            io::copy(&mut (&mut entry).take(remaining.saturating_add(1)), &mut out)
        } else {
            io::copy(&mut entry, &mut out)
        };
        let copied = copy_result.map_err(failed)?;

        written = written.saturating_add(copied);
        if max_extracted > 0 && written > max_extracted {
            return Err(error::archive::expands_too_large(
                archive_path,
                written,
                max_extracted,
            ));
        }
    }

    Ok(written)
}
