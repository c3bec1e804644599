//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Helpers to create temp directories, module layouts and ZIP archives with
//! a single function call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{ZipEntry, build_zip, create_temp_dir, write_module};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!
//!     // Module directory with a manifest
//!     let blog = write_module(&temp.path().join("Modules"), "Blog", r#"{"name": "Blog"}"#);
//!
//!     // Archive with one directory entry
//!     build_zip(&temp.path().join("blog.zip"), &[
//!         ZipEntry::Dir("Blog/"),
//!         ZipEntry::File("Blog/module.json", r#"{"name": "Blog"}"#),
//!     ]);
//! }
//! ```

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create `<modules_dir>/<dir_name>/module.json` with the given content.
///
/// Returns the module directory.
///
/// # Panics
///
/// Panics if the directory or file cannot be created.
pub fn write_module(modules_dir: &Path, dir_name: &str, manifest_json: &str) -> PathBuf {
    let dir = modules_dir.join(dir_name);
    std::fs::create_dir_all(&dir).expect("Failed to create module directory");
    std::fs::write(dir.join(crate::manifest::MANIFEST_FILE), manifest_json)
        .expect("Failed to write module.json");
    dir
}

/// Create test files below `root`.
///
/// Takes a list of (path, content) tuples; parent directories are created.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// One raw entry of a test archive
#[derive(Debug, Clone, Copy)]
pub enum ZipEntry<'a> {
    /// Directory entry; the name should end with `/`
    Dir(&'a str),
    /// File entry with its content
    File(&'a str, &'a str),
}

/// Write a stored (uncompressed) ZIP archive at `path`.
///
/// Entry names are written verbatim, so unsafe names like `../evil` can be
/// produced on purpose.
///
/// # Panics
///
/// Panics if the archive cannot be written.
pub fn build_zip(path: &Path, entries: &[ZipEntry<'_>]) {
    let file = File::create(path).expect("Failed to create zip file");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for entry in entries {
        match entry {
            ZipEntry::Dir(name) => {
                writer
                    .add_directory(*name, options)
                    .expect("Failed to add zip directory");
            }
            ZipEntry::File(name, content) => {
                writer
                    .start_file(*name, options)
                    .expect("Failed to start zip file");
                writer
                    .write_all(content.as_bytes())
                    .expect("Failed to write zip file");
            }
        }
    }

    writer.finish().expect("Failed to finish zip file");
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_write_module() {
        let temp = create_temp_dir();
        let dir = write_module(temp.path(), "Blog", r#"{"name": "Blog"}"#);
        assert_eq!(dir, temp.path().join("Blog"));
        assert!(dir.join("module.json").is_file());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(
            temp.path(),
            &[
                ("Blog/src/Blog.php", "<?php"),
                ("Blog/assets/logo.svg", "<svg/>"),
            ],
        );

        assert!(temp.path().join("Blog/src/Blog.php").exists());
        let content = std::fs::read_to_string(temp.path().join("Blog/assets/logo.svg"))
            .expect("Failed to read");
        assert_eq!(content, "<svg/>");
    }

    #[test]
    fn test_build_zip() {
        let temp = create_temp_dir();
        let path = temp.path().join("test.zip");
        build_zip(
            &path,
            &[
                ZipEntry::Dir("Blog/"),
                ZipEntry::File("Blog/module.json", "{}"),
            ],
        );

        let archive = zip::ZipArchive::new(File::open(&path).expect("open")).expect("read zip");
        let names: Vec<&str> = archive.file_names().collect();
        assert!(names.contains(&"Blog/"));
        assert!(names.contains(&"Blog/module.json"));
    }
}
