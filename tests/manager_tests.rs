//! Library-level install, uninstall and toggle scenarios

mod common;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use common::{TestWorkspace, blog_and_shop, build_zip};
use modman::archive::ArchiveFetcher;
use modman::error::{self, ModmanError};
use modman::{InstallSource, ModuleFilter, ModuleManager};

fn open(workspace: &TestWorkspace) -> ModuleManager {
    ModuleManager::open(workspace.config()).expect("Failed to open manager")
}

// ============================================================================
// Install from archive
// ============================================================================

#[test]
fn test_archive_install_skips_existing_and_installs_new() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog"}"#);
    workspace.write_statuses(&[("Blog", false)]);
    workspace.write_file("bootstrap/cache/config.php", "<?php return [];");
    let archive = workspace.zip("uploads/modules.zip", &blog_and_shop());

    let mut manager = open(&workspace);
    let outcome = manager.install(&InstallSource::archive(&archive));

    assert_eq!(outcome.installed_names(), ["Shop"]);
    assert_eq!(outcome.skipped(), ["Blog"]);

    let shop = &outcome.installed()[0];
    assert!(shop.active);
    assert_eq!(shop.version.as_deref(), Some("1.2.0"));
    assert_eq!(shop.description.as_deref(), Some("Store front"));

    // Pre-existing module left alone
    assert_eq!(
        workspace.read_file("Modules/Blog/module.json"),
        r#"{"name": "Blog"}"#
    );
    assert_eq!(workspace.statuses()["Blog"], false);
    assert_eq!(workspace.statuses()["Shop"], true);

    assert!(workspace.file_exists("Modules/Shop/src/Shop.php"));
    assert!(!archive.exists());
    assert!(!workspace.file_exists("storage/app/temp_module_extract"));
    assert!(!workspace.file_exists("bootstrap/cache/config.php"));
}

#[test]
fn test_reinstalling_same_archive_skips_everything() {
    let workspace = TestWorkspace::new();
    let mut manager = open(&workspace);

    let first = workspace.zip("first.zip", &blog_and_shop());
    let outcome = manager.install_from_zip(&first, true);
    assert_eq!(outcome.installed_names(), ["Blog", "Shop"]);

    let second = workspace.zip("second.zip", &blog_and_shop());
    let outcome = manager.install_from_zip(&second, true);
    assert!(!outcome.has_installed());
    assert_eq!(outcome.skipped(), ["Blog", "Shop"]);
    assert!(!second.exists());
}

#[test]
fn test_relative_archive_path_resolves_against_upload_directory() {
    let workspace = TestWorkspace::new();
    workspace.zip("storage/app/public/temp/modules/blog.zip", &blog_and_shop()[..2]);

    let mut manager = open(&workspace);
    let outcome = manager.install_from_zip("temp/modules/blog.zip", false);

    assert_eq!(outcome.installed_names(), ["Blog"]);
    assert!(!workspace.file_exists("storage/app/public/temp/modules/blog.zip"));
}

#[test]
fn test_traversal_archive_installs_nothing() {
    let workspace = TestWorkspace::new();
    let archive = workspace.zip(
        "evil.zip",
        &[
            ("Good/module.json", Some(r#"{"name": "Good"}"#)),
            ("../escaped.txt", Some("gotcha")),
        ],
    );

    let mut manager = open(&workspace);
    let outcome = manager.install_from_zip(&archive, true);

    assert!(outcome.is_empty());
    assert!(!workspace.file_exists("Modules/Good"));
    assert!(!workspace.file_exists("storage/app/escaped.txt"));
    assert!(!archive.exists());
    assert!(!workspace.file_exists("storage/app/temp_module_extract"));
}

#[test]
fn test_manifest_name_overrides_directory_name() {
    let workspace = TestWorkspace::new();
    let archive = workspace.zip(
        "renamed.zip",
        &[
            ("blog-main/", None),
            ("blog-main/module.json", Some(r#"{"name": "Blog"}"#)),
        ],
    );

    let mut manager = open(&workspace);
    let outcome = manager.install_from_zip(&archive, true);

    assert_eq!(outcome.installed_names(), ["Blog"]);
    assert!(workspace.file_exists("Modules/Blog/module.json"));
    assert!(!workspace.file_exists("Modules/blog-main"));
}

#[test]
fn test_invalid_entry_removed_and_reported_skipped() {
    let workspace = TestWorkspace::new();
    let archive = workspace.zip(
        "mixed.zip",
        &[
            ("Assets/", None),
            ("Assets/logo.svg", Some("<svg/>")),
            ("Blog/module.json", Some(r#"{"name": "Blog"}"#)),
        ],
    );

    let mut manager = open(&workspace);
    let outcome = manager.install_from_zip(&archive, true);

    assert_eq!(outcome.installed_names(), ["Blog"]);
    assert_eq!(outcome.skipped(), ["Assets"]);
    assert!(!workspace.file_exists("Modules/Assets"));
}

#[test]
fn test_oversize_archive_rejected() {
    let workspace = TestWorkspace::new();
    workspace.write_file("modman.yaml", "upload:\n  max_size: 16\n");
    let archive = workspace.zip("big.zip", &blog_and_shop());

    let mut manager = open(&workspace);
    let outcome = manager.install_from_zip(&archive, true);

    assert!(outcome.is_empty());
    assert!(!workspace.file_exists("Modules/Blog"));
    assert!(!archive.exists());
}

#[test]
fn test_missing_archive_installs_nothing() {
    let workspace = TestWorkspace::new();
    let mut manager = open(&workspace);
    let outcome = manager.install_from_zip(workspace.path.join("missing.zip"), true);
    assert!(outcome.is_empty());
}

// ============================================================================
// Install from local path
// ============================================================================

#[test]
fn test_local_path_copied_and_source_kept() {
    let workspace = TestWorkspace::new();
    workspace.write_file("shared/Reports/module.json", r#"{"name": "Reports"}"#);
    let source = workspace.path.join("shared/Reports");

    let mut manager = open(&workspace);
    let outcome = manager.install_from_path(&source);

    assert_eq!(outcome.installed_names(), ["Reports"]);
    assert!(outcome.installed()[0].active);
    assert!(source.join("module.json").exists());
    assert!(workspace.file_exists("Modules/Reports/module.json"));
}

#[test]
fn test_local_path_conflict_skipped() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Reports", r#"{"name": "Reports", "version": "1.0.0"}"#);
    workspace.write_file(
        "shared/Reports/module.json",
        r#"{"name": "Reports", "version": "2.0.0"}"#,
    );

    let mut manager = open(&workspace);
    let outcome = manager.install_from_path(workspace.path.join("shared/Reports"));

    assert!(!outcome.has_installed());
    assert_eq!(outcome.skipped(), ["Reports"]);
    assert!(workspace.read_file("Modules/Reports/module.json").contains("1.0.0"));
}

// ============================================================================
// Install from remote repository
// ============================================================================

/// Serves a Blog archive for URLs ending in `serve_suffix`
struct FakeFetcher {
    serve_suffix: &'static str,
    requested: Rc<RefCell<Vec<String>>>,
}

impl ArchiveFetcher for FakeFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> modman::Result<()> {
        self.requested.borrow_mut().push(url.to_string());
        if !url.ends_with(self.serve_suffix) {
            return Err(error::remote::fetch_failed(url, "404 Not Found"));
        }
        build_zip(
            dest,
            &[
                ("blog-master/", None),
                ("blog-master/module.json", Some(r#"{"name": "Blog"}"#)),
            ],
        );
        Ok(())
    }
}

#[test]
fn test_remote_install_falls_back_to_master() {
    let workspace = TestWorkspace::new();
    let requested = Rc::new(RefCell::new(Vec::new()));
    let fetcher = FakeFetcher {
        serve_suffix: "/master.zip",
        requested: Rc::clone(&requested),
    };

    let mut manager = open(&workspace).with_fetcher(fetcher);
    let outcome = manager.install_from_github("acme/blog", None);

    assert_eq!(outcome.installed_names(), ["Blog"]);
    assert_eq!(
        *requested.borrow(),
        [
            "https://github.com/acme/blog/archive/refs/heads/main.zip",
            "https://github.com/acme/blog/archive/refs/heads/master.zip",
        ]
    );
    assert!(!workspace.file_exists("storage/app/temp_github_module"));
}

#[test]
fn test_remote_install_without_any_branch_installs_nothing() {
    let workspace = TestWorkspace::new();
    let requested = Rc::new(RefCell::new(Vec::new()));
    let fetcher = FakeFetcher {
        serve_suffix: "/never.zip",
        requested: Rc::clone(&requested),
    };

    let mut manager = open(&workspace).with_fetcher(fetcher);
    let outcome = manager.install_from_github("https://github.com/acme/blog.git", Some("dev"));

    assert!(outcome.is_empty());
    assert_eq!(requested.borrow().len(), 2);
    assert!(requested.borrow()[0].ends_with("/dev.zip"));
    assert!(!workspace.file_exists("Modules"));
}

// ============================================================================
// Uninstall, enable and disable
// ============================================================================

#[test]
fn test_uninstall_unknown_module() {
    let workspace = TestWorkspace::new();
    let mut manager = open(&workspace);

    assert!(!manager.uninstall("Ghost"));
    assert!(matches!(
        manager.try_uninstall("Ghost"),
        Err(ModmanError::ModuleNotFound { .. })
    ));
}

#[test]
fn test_uninstall_removes_module_directory() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog"}"#);

    let mut manager = open(&workspace);
    assert!(manager.can_uninstall("blog"));
    assert!(manager.uninstall("blog"));

    assert!(!workspace.file_exists("Modules/Blog"));
    assert!(manager.registry().find("Blog").is_none());
}

#[test]
fn test_protected_module_cannot_be_removed_or_disabled() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Core", r#"{"name": "Core", "protected": true}"#);
    workspace.write_statuses(&[("Core", true)]);

    let mut manager = open(&workspace);
    assert!(!manager.can_uninstall("Core"));
    assert!(!manager.can_disable("Core"));
    assert!(manager.set_enabled("Core", false).is_none());
    assert!(matches!(
        manager.try_uninstall("Core"),
        Err(ModmanError::ModuleProtected { .. })
    ));
    assert!(workspace.file_exists("Modules/Core"));
    assert_eq!(workspace.statuses()["Core"], true);
}

#[test]
fn test_enabled_dependent_blocks_disable() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Core", r#"{"name": "Core"}"#);
    workspace.create_module("Blog", r#"{"name": "Blog", "requires": ["Core"]}"#);
    workspace.write_statuses(&[("Core", true), ("Blog", true)]);

    let mut manager = open(&workspace);
    assert!(matches!(
        manager.disable("Core"),
        Err(ModmanError::ModuleHasDependents { .. })
    ));

    manager.disable("Blog").unwrap();
    let core = manager.disable("Core").unwrap();
    assert!(!core.active);
    assert_eq!(workspace.statuses()["Core"], false);

    // A disabled dependent still blocks removal
    assert!(!manager.can_uninstall("Core"));
}

#[test]
fn test_enable_uses_canonical_name() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog"}"#);

    let mut manager = open(&workspace);
    let summary = manager.set_enabled("blog", true).unwrap();

    assert_eq!(summary.name, "Blog");
    assert!(summary.active);
    assert_eq!(workspace.statuses()["Blog"], true);
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_list_and_overview() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog", "keywords": ["cms"]}"#);
    workspace.create_module("Shop", r#"{"name": "Shop"}"#);
    workspace.create_module("Wiki", r#"{"name": "Wiki"}"#);
    workspace.write_statuses(&[("Blog", true), ("Shop", false)]);

    let manager = open(&workspace);

    let names = |filter: &ModuleFilter| -> Vec<String> {
        manager.list(filter).into_iter().map(|m| m.name).collect()
    };
    assert_eq!(names(&ModuleFilter::default()), ["Blog", "Shop", "Wiki"]);
    assert_eq!(names(&ModuleFilter::active()), ["Blog"]);
    assert_eq!(names(&ModuleFilter::inactive()), ["Shop", "Wiki"]);

    let overview = manager.overview();
    assert_eq!(overview.total, 3);
    assert_eq!(overview.active, 1);
    assert_eq!(overview.inactive, 2);
}
