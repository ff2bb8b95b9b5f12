//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from the user's dotfile and environment
fn nsot(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nsot").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("NSOT_URL")
        .env_remove("NSOT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    nsot(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nsot"));
}

#[test]
fn test_help_lists_resources() {
    let home = TempDir::new().unwrap();
    nsot(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("changes"))
        .stdout(predicate::str::contains("interfaces"))
        .stdout(predicate::str::contains("networks"));
}

#[test]
fn test_changes_list_without_site_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    nsot(&home)
        .args(["--url", "http://127.0.0.1:9/api", "changes", "list"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Missing option \"-s\" / \"--site-id\""));
}

#[test]
fn test_interfaces_add_requires_name() {
    let home = TempDir::new().unwrap();
    nsot(&home)
        .args(["interfaces", "add", "-s", "1", "-D", "5"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--name"));
}

#[test]
fn test_bad_attribute_is_a_transform_error() {
    let home = TempDir::new().unwrap();
    nsot(&home)
        .args(["interfaces", "add", "-s", "1", "-D", "5", "-n", "eth0", "-a", "owner"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Invalid format 'owner'"));
}

#[test]
fn test_conflicting_attribute_actions_are_rejected_by_the_parser() {
    let home = TempDir::new().unwrap();
    nsot(&home)
        .args(["networks", "update", "-i", "1", "-a", "owner=ops", "-d", "-r"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_missing_url_is_a_configuration_error() {
    let home = TempDir::new().unwrap();
    nsot(&home)
        .args(["changes", "list", "-s", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No API URL configured"));
}

#[test]
fn test_missing_explicit_config_file() {
    let home = TempDir::new().unwrap();
    nsot(&home)
        .args(["--config", "nonexistent.yaml", "changes", "list", "-s", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_default_site_comes_from_dotfile() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".nsotrc.yaml"), "default_site: 1\n").unwrap();

    // The site resolves from the dotfile, so the failure is the missing URL
    nsot(&home)
        .args(["changes", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No API URL configured"));
}

#[test]
fn test_invalid_dotfile_is_rejected() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".nsotrc.yaml"), "url: ftp://nsot\n").unwrap();

    nsot(&home)
        .args(["changes", "list", "-s", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid API URL"));
}

#[test]
fn test_bulk_file_is_parsed_before_connecting() {
    let home = TempDir::new().unwrap();
    let bulk = home.path().join("interfaces.txt");
    fs::write(&bulk, "device:name:attributes\n1:eth0:owner=ops\n1\n").unwrap();

    nsot(&home)
        .args(["interfaces", "add", "-s", "1", "-b"])
        .arg(&bulk)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_unreachable_server_is_a_server_error() {
    let home = TempDir::new().unwrap();
    nsot(&home)
        .args(["--url", "http://127.0.0.1:9/api", "networks", "list", "-s", "1"])
        .assert()
        .failure()
        .code(4)
        .stdout(predicate::str::is_empty());
}
