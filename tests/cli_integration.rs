//! CLI integration tests for docinv
//!
//! These run the real binary against temporary repository trees and check
//! both the written inventory and the validator's behavior.

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance for the docinv binary
fn docinv_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("docinv"))
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Create a workspace with a pinned config and a `repos/` tree:
///
/// ```text
/// repos/repoA/{.git/, Cargo.toml, README.md, docs/notes.md}
/// repos/repoB/{.git/, AGENTS.md}
/// ```
fn setup_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();

    write(
        &dir.path().join("docinv.toml"),
        r#"
[scan]
base_path = "repos"
output_path = "out/inventory.json"
use_git_history = false
"#,
    );

    let repos = dir.path().join("repos");
    fs::create_dir_all(repos.join("repoA/.git")).unwrap();
    fs::create_dir_all(repos.join("repoB/.git")).unwrap();
    write(&repos.join("repoA/Cargo.toml"), "[package]\nname = \"a\"\n");
    write(&repos.join("repoA/README.md"), "# repoA\n");
    write(&repos.join("repoA/docs/notes.md"), "notes\n");
    write(&repos.join("repoA/src/ignored.md"), "not documentation\n");
    write(&repos.join("repoB/AGENTS.md"), "agents\n");

    dir
}

fn read_inventory(dir: &TempDir) -> Value {
    let content = fs::read_to_string(dir.path().join("out/inventory.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// =============================================================================
// Scan Tests
// =============================================================================

#[test]
fn test_scan_writes_inventory() {
    let dir = setup_workspace();

    docinv_cmd()
        .current_dir(dir.path())
        .arg("scan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files found:        3"))
        .stdout(predicate::str::contains("Repositories found: 2"))
        .stdout(predicate::str::contains("Inventory written to"));

    let inventory = read_inventory(&dir);
    assert_eq!(inventory["statistics"]["total_files"], 3);
    assert_eq!(inventory["statistics"]["repositories_found"], 2);
    assert_eq!(inventory["doc_directories"][0], "docs");

    let files = inventory["documentation_files"].as_array().unwrap();
    let order: Vec<(&str, &str)> = files
        .iter()
        .map(|f| {
            (
                f["repo_name"].as_str().unwrap(),
                f["relative_path"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            ("repoA", "docs/notes.md"),
            ("repoA", "README.md"),
            ("repoB", "AGENTS.md"),
        ]
    );

    assert_eq!(files[0]["languages"], serde_json::json!(["Rust"]));
    assert_eq!(files[2]["languages"], serde_json::json!(["Markdown"]));
    assert!(files[0]["last_modified"].is_i64());
    assert!(Path::new(files[0]["path"].as_str().unwrap()).is_absolute());
}

#[test]
fn test_scan_is_default_command() {
    let dir = setup_workspace();

    docinv_cmd().current_dir(dir.path()).assert().success();

    assert_eq!(read_inventory(&dir)["statistics"]["total_files"], 3);
}

#[test]
fn test_scan_overwrites_previous_output() {
    let dir = setup_workspace();
    write(&dir.path().join("out/inventory.json"), "garbage");

    docinv_cmd().current_dir(dir.path()).arg("scan").assert().success();

    assert_eq!(read_inventory(&dir)["statistics"]["total_files"], 3);
}

#[test]
fn test_scan_root_and_output_flags() {
    let dir = setup_workspace();
    let other = dir.path().join("elsewhere.json");

    docinv_cmd()
        .current_dir(dir.path())
        .args(["scan", "repos/repoB", "--output"])
        .arg(&other)
        .assert()
        .success();

    let inventory: Value = serde_json::from_str(&fs::read_to_string(&other).unwrap()).unwrap();
    assert_eq!(inventory["statistics"]["total_files"], 1);
    assert!(!dir.path().join("out/inventory.json").exists());
}

#[test]
fn test_scan_json_summary() {
    let dir = setup_workspace();

    let output = docinv_cmd()
        .current_dir(dir.path())
        .args(["scan", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["statistics"]["total_files"], 3);
    assert_eq!(json["skipped"], 0);
    assert_eq!(json["statistics"]["by_language"]["Rust"], 2);
}

#[test]
fn test_scan_yaml_copy() {
    let dir = setup_workspace();

    docinv_cmd()
        .current_dir(dir.path())
        .args(["scan", "--yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("YAML inventory written to"));

    let yaml = fs::read_to_string(dir.path().join("out/inventory.yaml")).unwrap();
    assert!(yaml.contains("repo_name: repoB"));
}

#[test]
fn test_scan_missing_root_fails() {
    let dir = setup_workspace();

    docinv_cmd()
        .current_dir(dir.path())
        .args(["scan", "no-such-dir"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scan root does not exist"))
        .stderr(predicate::str::contains("no-such-dir"));
}

#[test]
fn test_scan_empty_root_still_writes_document() {
    let dir = setup_workspace();
    fs::create_dir_all(dir.path().join("empty")).unwrap();

    docinv_cmd()
        .current_dir(dir.path())
        .args(["scan", "empty"])
        .assert()
        .success();

    let inventory = read_inventory(&dir);
    assert_eq!(inventory["statistics"]["total_files"], 0);
    assert_eq!(inventory["documentation_files"], serde_json::json!([]));
}

// =============================================================================
// Validate Tests
// =============================================================================

#[test]
fn test_validate_after_scan() {
    let dir = setup_workspace();
    docinv_cmd().current_dir(dir.path()).arg("scan").assert().success();

    docinv_cmd()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files:     3 in 2 repositories"))
        .stdout(predicate::str::contains("Language 'Rust': 2 files"))
        .stdout(predicate::str::contains("Inventory is valid"));
}

#[test]
fn test_validate_json_queries() {
    let dir = setup_workspace();
    docinv_cmd().current_dir(dir.path()).arg("scan").assert().success();

    let output = docinv_cmd()
        .current_dir(dir.path())
        .args(["validate", "--language", "Markdown", "--limit", "2", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["valid"], true);
    assert_eq!(json["language"]["count"], 1);
    assert_eq!(json["most_recent"].as_array().unwrap().len(), 2);
    assert_eq!(json["table"].as_array().unwrap().len(), 3);
    assert!(json["repository_inventory_count"].is_null());
}

#[test]
fn test_validate_empty_inventory() {
    let dir = setup_workspace();
    fs::create_dir_all(dir.path().join("empty")).unwrap();
    docinv_cmd()
        .current_dir(dir.path())
        .args(["scan", "empty"])
        .assert()
        .success();

    docinv_cmd()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Most recent (0):"));
}

#[test]
fn test_validate_missing_file_fails() {
    let dir = setup_workspace();

    docinv_cmd()
        .current_dir(dir.path())
        .args(["validate", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Inventory file not found"))
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn test_validate_corrupt_file_fails() {
    let dir = setup_workspace();
    write(&dir.path().join("bad.json"), "{ \"documentation_files\": ");

    docinv_cmd()
        .current_dir(dir.path())
        .args(["validate", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse inventory file"));
}

#[test]
fn test_validate_counts_repository_inventory() {
    let dir = setup_workspace();
    docinv_cmd().current_dir(dir.path()).arg("scan").assert().success();
    write(
        &dir.path().join("repo_inventory.json"),
        r#"{"rust_repos": [{"name": "a"}], "typescript_repos": [{"name": "b"}, {"name": "c"}]}"#,
    );

    docinv_cmd()
        .current_dir(dir.path())
        .args(["validate", "--repo-inventory", "repo_inventory.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository inventory: 3 repositories"));
}

#[test]
fn test_validate_reads_default_repository_inventory() {
    let dir = setup_workspace();
    docinv_cmd().current_dir(dir.path()).arg("scan").assert().success();
    write(
        &dir.path().join("repo_inventory.json"),
        r#"{"rust_repos": [{"name": "a"}, {"name": "b"}], "typescript_repos": []}"#,
    );

    docinv_cmd()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository inventory: 2 repositories"));

    let output = docinv_cmd()
        .current_dir(dir.path())
        .args(["--format", "json", "validate"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["repository_inventory_count"], 2);
}

#[test]
fn test_validate_absent_repository_inventory_is_silent() {
    let dir = setup_workspace();
    docinv_cmd().current_dir(dir.path()).arg("scan").assert().success();

    docinv_cmd()
        .current_dir(dir.path())
        .args(["validate", "--repo-inventory", "nope.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository inventory").not())
        .stderr(predicate::str::is_empty());
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_shows_loaded_file() {
    let dir = setup_workspace();

    docinv_cmd()
        .current_dir(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("docinv.toml"))
        .stdout(predicate::str::contains("use_git_history = false"));
}

#[test]
fn test_explicit_config_must_exist() {
    let dir = setup_workspace();

    docinv_cmd()
        .current_dir(dir.path())
        .args(["--config", "absent.toml", "scan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
