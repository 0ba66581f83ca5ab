//! Run-level failure tests using the REAL dircat binary

mod common;

use assert_cmd::Command;
use common::TestTree;
use predicates::prelude::*;

#[allow(deprecated)]
fn dircat_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dircat").unwrap();
    cmd.env_remove("DIRCAT_OUTPUT");
    cmd
}

#[test]
fn test_missing_output_parent_fails() {
    let tree = TestTree::new();
    tree.write_file("src/a.txt", "a");
    let output = tree.path.join("no/such/dir/out.txt");

    dircat_cmd()
        .arg("concat")
        .arg(tree.path.join("src"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to create output file"))
        .stdout(predicate::str::contains("Saved all files").not());

    assert!(!output.exists());
}

#[test]
fn test_output_not_set_fails() {
    let tree = TestTree::new();
    tree.write_file("src/a.txt", "a");

    dircat_cmd()
        .arg("concat")
        .arg(tree.path.join("src"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("output path is not set"));
}

#[test]
fn test_missing_config_file_fails() {
    let tree = TestTree::new();

    dircat_cmd()
        .arg("concat")
        .arg("--config")
        .arg(tree.path.join("missing.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_malformed_config_fails() {
    let tree = TestTree::new();
    tree.write_file("dircat.yaml", "directories: [unclosed\n");

    dircat_cmd()
        .arg("concat")
        .arg("--config")
        .arg(tree.path.join("dircat.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"))
        .stderr(predicate::str::contains("dircat.yaml"));
}

#[test]
fn test_unknown_config_key_fails() {
    let tree = TestTree::new();
    tree.write_file("dircat.yaml", "folders:\n  - src\noutput: out.txt\n");

    dircat_cmd()
        .arg("concat")
        .arg("--config")
        .arg(tree.path.join("dircat.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));

    assert!(!tree.file_exists("out.txt"));
}

#[test]
fn test_invalid_include_glob_fails_before_output() {
    let tree = TestTree::new();
    tree.write_file("src/a.txt", "a");
    tree.write_file("out.txt", "previous run");

    dircat_cmd()
        .arg("concat")
        .arg(tree.path.join("src"))
        .arg("-o")
        .arg(tree.path.join("out.txt"))
        .args(["--include", "src/{a,b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid include pattern"));

    assert_eq!(tree.read_file("out.txt"), "previous run");
}
