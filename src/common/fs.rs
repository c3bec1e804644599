//! File system helpers used by the installer, registry and backups
//!
//! These mirror the handful of directory operations the install pipeline
//! needs; all of them return plain `std::io::Result` and leave error context
//! to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Create `path` and any missing parents
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Make `path` an existing, empty directory
pub fn clean_dir(path: &Path) -> io::Result<()> {
    if path.exists() {
        for entry in fs::read_dir(path)? {
            let entry_path = entry?.path();
            if entry_path.is_dir() {
                fs::remove_dir_all(&entry_path)?;
            } else {
                fs::remove_file(&entry_path)?;
            }
        }
        Ok(())
    } else {
        fs::create_dir_all(path)
    }
}

/// Remove a directory tree; a missing directory is not an error
pub fn remove_dir(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Remove a file; a missing file is not an error
pub fn remove_file(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Read a UTF-8 text file
pub fn read_text(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Write a text file, creating missing parents
pub fn write_text(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)
}

/// Immediate subdirectories of `path`, sorted by name
pub fn directories(path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = entries_where(path, Path::is_dir)?;
    dirs.sort();
    Ok(dirs)
}

/// Immediate files of `path`, sorted by name
pub fn files(path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = entries_where(path, Path::is_file)?;
    files.sort();
    Ok(files)
}

fn entries_where(path: &Path, keep: fn(&Path) -> bool) -> io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        if keep(&entry_path) {
            out.push(entry_path);
        }
    }
    Ok(out)
}

/// Every file below `path`, recursively
pub fn all_files(path: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(path)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
}

/// Move a directory, falling back to copy + delete when a rename is not
/// possible (e.g. across file systems)
pub fn move_dir(src: &Path, dst: &Path) -> io::Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    copy_dir_recursive(src, dst)?;
    fs::remove_dir_all(src)
}

/// Move a single file, falling back to copy + delete
pub fn move_file(src: &Path, dst: &Path) -> io::Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }
    fs::copy(src, dst)?;
    fs::remove_file(src)
}

/// Copy a single file, creating the destination's parent
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(src, dst).map(|_| ())
}

/// Copy a directory recursively
///
/// Symlinks are recreated as links rather than followed, so a link never
/// pulls content from outside `src` into `dst` and link cycles are not
/// walked. Sockets, FIFOs and devices fail the copy.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    for entry in WalkDir::new(src).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(io::Error::other)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(io::Error::other)?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("unsupported file type: {}", entry.path().display()),
            ));
        }
    }

    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(link)?, target)
}

#[cfg(windows)]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    let points_to = fs::read_link(link)?;
    if link.is_dir() {
        std::os::windows::fs::symlink_dir(points_to, target)
    } else {
        std::os::windows::fs::symlink_file(points_to, target)
    }
}

#[cfg(not(any(unix, windows)))]
fn copy_symlink(link: &Path, _target: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("cannot copy symlink: {}", link.display()),
    ))
}

/// Whether `inner` is `outer` or lies below it, after resolving both
///
/// Paths that cannot be resolved are compared as given.
pub fn is_within(inner: &Path, outer: &Path) -> bool {
    let resolve = |path: &Path| dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    resolve(inner).starts_with(resolve(outer))
}
