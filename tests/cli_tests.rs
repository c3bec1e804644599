//! End-to-end tests of the modman binary

mod common;

use common::{TestWorkspace, blog_and_shop, modman_cmd};
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let workspace = TestWorkspace::new();
    modman_cmd(&workspace)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("uninstall"))
        .stdout(predicate::str::contains("overview"));
}

#[test]
fn test_install_zip_keeps_original_archive() {
    let workspace = TestWorkspace::new();
    let archive = workspace.zip("downloads/modules.zip", &blog_and_shop());

    modman_cmd(&workspace)
        .args(["install", "zip"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed Blog"))
        .stdout(predicate::str::contains("Installed Shop"));

    assert!(archive.exists());
    assert!(workspace.file_exists("Modules/Blog/module.json"));
    assert!(workspace.file_exists("Modules/Shop/src/Shop.php"));
    assert_eq!(workspace.statuses()["Shop"], true);
}

#[test]
fn test_install_zip_reports_skipped_modules() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog"}"#);
    let archive = workspace.zip("modules.zip", &blog_and_shop());

    modman_cmd(&workspace)
        .args(["install", "zip"])
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped Blog"))
        .stdout(predicate::str::contains("Installed Shop"));
}

#[test]
fn test_install_zip_missing_file_fails() {
    let workspace = TestWorkspace::new();
    modman_cmd(&workspace)
        .args(["install", "zip", "missing.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_install_corrupt_zip_reports_nothing_installed() {
    let workspace = TestWorkspace::new();
    workspace.write_file("broken.zip", "not a zip archive");

    modman_cmd(&workspace)
        .args(["install", "zip"])
        .arg(workspace.path.join("broken.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing was installed"));

    assert!(workspace.file_exists("broken.zip"));
    assert!(!workspace.file_exists("Modules"));
}

#[test]
fn test_install_path_copies_directory() {
    let workspace = TestWorkspace::new();
    workspace.write_file("shared/Reports/module.json", r#"{"name": "Reports"}"#);

    modman_cmd(&workspace)
        .args(["install", "path"])
        .arg(workspace.path.join("shared/Reports"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed Reports"));

    assert!(workspace.file_exists("shared/Reports/module.json"));
    assert!(workspace.file_exists("Modules/Reports/module.json"));
}

#[test]
fn test_list_empty() {
    let workspace = TestWorkspace::new();
    modman_cmd(&workspace)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No modules installed."));
}

#[test]
fn test_list_filters_by_state() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog", "version": "2.1.0"}"#);
    workspace.create_module("Shop", r#"{"name": "Shop"}"#);
    workspace.write_statuses(&[("Blog", true)]);

    modman_cmd(&workspace)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed modules (2)"))
        .stdout(predicate::str::contains("v2.1.0"));

    modman_cmd(&workspace)
        .args(["list", "--inactive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shop"))
        .stdout(predicate::str::contains("Blog").not());
}

#[test]
fn test_list_detailed() {
    let workspace = TestWorkspace::new();
    workspace.create_module(
        "Blog",
        r#"{"name": "Blog", "description": "Posts and pages"}"#,
    );

    modman_cmd(&workspace)
        .args(["list", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Description: Posts and pages"))
        .stdout(predicate::str::contains("State: disabled"))
        .stdout(predicate::str::contains("Path:"));
}

#[test]
fn test_list_detailed_shows_authors_and_license() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog"}"#);
    workspace.write_file(
        "Modules/Blog/composer.json",
        r#"{"license": "MIT", "authors": [{"name": "Jane", "homepage": "https://jane.dev"}, {"name": "Joe"}]}"#,
    );

    modman_cmd(&workspace)
        .args(["list", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Authors: Jane (https://jane.dev), Joe"))
        .stdout(predicate::str::contains("License: MIT"));
}

#[test]
fn test_list_by_license() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog", "license": "MIT"}"#);
    workspace.create_module("Shop", r#"{"name": "Shop", "license": "MIT"}"#);
    workspace.create_module("Auth", r#"{"name": "Auth"}"#);

    modman_cmd(&workspace)
        .args(["list", "--by-license"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MIT (2):"))
        .stdout(predicate::str::contains("No license (1):"))
        .stdout(predicate::str::is_match(r"(?s)No license \(1\):\s+Auth.*MIT \(2\):\s+Blog.*Shop").unwrap());
}

#[test]
fn test_enable_then_disable() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog"}"#);

    modman_cmd(&workspace)
        .args(["enable", "blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabled Blog"));
    assert_eq!(workspace.statuses()["Blog"], true);

    modman_cmd(&workspace)
        .args(["disable", "Blog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Disabled Blog"));
    assert_eq!(workspace.statuses()["Blog"], false);
}

#[test]
fn test_disable_protected_module_fails() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Core", r#"{"name": "Core", "protected": true}"#);
    workspace.write_statuses(&[("Core", true)]);

    modman_cmd(&workspace)
        .args(["disable", "Core"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Core"));
    assert_eq!(workspace.statuses()["Core"], true);
}

#[test]
fn test_uninstall_with_yes() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog"}"#);

    modman_cmd(&workspace)
        .args(["uninstall", "Blog", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstalled Blog"));

    assert!(!workspace.file_exists("Modules/Blog"));
}

#[test]
fn test_uninstall_unknown_module_fails() {
    let workspace = TestWorkspace::new();
    modman_cmd(&workspace)
        .args(["uninstall", "Ghost", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ghost"));
}

#[test]
fn test_overview_counts() {
    let workspace = TestWorkspace::new();
    workspace.create_module("Blog", r#"{"name": "Blog"}"#);
    workspace.create_module("Shop", r#"{"name": "Shop"}"#);
    workspace.write_statuses(&[("Blog", true), ("Shop", false)]);

    modman_cmd(&workspace)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total:    2"))
        .stdout(predicate::str::contains("Active:   1"))
        .stdout(predicate::str::contains("Inactive: 1"));
}

#[test]
fn test_missing_base_path_fails() {
    let workspace = TestWorkspace::new();
    modman_cmd(&workspace)
        .env("MODMAN_BASE_PATH", workspace.path.join("missing"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_explicit_config_file() {
    let workspace = TestWorkspace::new();
    workspace.write_file("conf/modman.yaml", "modules_dir: plugins\n");
    workspace.write_file("plugins/Blog/module.json", r#"{"name": "Blog"}"#);

    modman_cmd(&workspace)
        .args(["list", "--config"])
        .arg(workspace.path.join("conf/modman.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Blog"));
}

#[test]
fn test_completions_without_application_root() {
    let workspace = TestWorkspace::new();
    modman_cmd(&workspace)
        .env("MODMAN_BASE_PATH", workspace.path.join("missing"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modman"));
}

#[test]
fn test_completions_unknown_shell() {
    let workspace = TestWorkspace::new();
    modman_cmd(&workspace)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell: tcsh"));
}
