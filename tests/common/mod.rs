//! Common test utilities for modman integration tests

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// An application root with an empty `modman.yaml`
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the application root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new application root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let workspace = Self { temp, path };
        // Keeps a user-level modman.yaml out of the tests
        workspace.write_file("modman.yaml", "");
        workspace
    }

    /// Write a file relative to the application root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the application root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a path exists relative to the application root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write `Modules/<dir>/module.json`
    pub fn create_module(&self, dir: &str, manifest: &str) -> PathBuf {
        self.write_file(&format!("Modules/{dir}/module.json"), manifest);
        self.path.join("Modules").join(dir)
    }

    /// Store enabled flags in the statuses file
    pub fn write_statuses(&self, statuses: &[(&str, bool)]) {
        let map: serde_json::Map<String, serde_json::Value> = statuses
            .iter()
            .map(|(name, enabled)| ((*name).to_string(), serde_json::Value::Bool(*enabled)))
            .collect();
        self.write_file(
            "modules_statuses.json",
            &serde_json::to_string_pretty(&map).expect("Failed to encode statuses"),
        );
    }

    /// Enabled flags currently stored in the statuses file
    pub fn statuses(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_file("modules_statuses.json"))
            .expect("Failed to parse statuses")
    }

    /// Build a ZIP archive relative to the application root
    pub fn zip(&self, path: &str, entries: &[(&str, Option<&str>)]) -> PathBuf {
        let archive = self.path.join(path);
        if let Some(parent) = archive.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        build_zip(&archive, entries);
        archive
    }

    /// Configuration rooted at this workspace with built-in defaults
    pub fn config(&self) -> modman::ManagerConfig {
        modman::ManagerConfig::load(&self.path, None).expect("Failed to load configuration")
    }
}

/// Write a stored ZIP; `None` content marks a directory entry
pub fn build_zip(path: &Path, entries: &[(&str, Option<&str>)]) {
    let file = File::create(path).expect("Failed to create archive");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, content) in entries {
        match content {
            None => {
                writer
                    .add_directory(*name, options)
                    .expect("Failed to add directory entry");
            }
            Some(content) => {
                writer
                    .start_file(*name, options)
                    .expect("Failed to start file entry");
                writer
                    .write_all(content.as_bytes())
                    .expect("Failed to write file entry");
            }
        }
    }
    writer.finish().expect("Failed to finish archive");
}

/// Entries of an archive holding an installable `Blog` and `Shop`
pub fn blog_and_shop() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("Blog/", None),
        ("Blog/module.json", Some(r#"{"name": "Blog"}"#)),
        ("Shop/", None),
        (
            "Shop/module.json",
            Some(r#"{"name": "Shop", "version": "1.2.0", "description": "Store front"}"#),
        ),
        ("Shop/src/Shop.php", Some("<?php\n")),
    ]
}

/// Command for the modman binary rooted at `workspace`
#[allow(deprecated)]
pub fn modman_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("modman").expect("modman binary not built");
    cmd.env_remove("MODMAN_CONFIG");
    cmd.env("MODMAN_BASE_PATH", &workspace.path);
    cmd.env("MODMAN_LOG", "off");
    cmd
}
