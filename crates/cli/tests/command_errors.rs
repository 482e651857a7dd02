use std::fs;

use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn list_fails_for_missing_input_file() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("absent.json");

    assert_cmd::cargo::cargo_bin_cmd!("symtab-lens")
        .arg("list")
        .arg("--input")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn list_fails_for_unsupported_extension() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("symtab.xml");
    fs::write(&path, "<symtab/>").expect("write");

    assert_cmd::cargo::cargo_bin_cmd!("symtab-lens")
        .arg("list")
        .arg("--input")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported symbol table format"));
}

#[test]
fn malformed_documents_produce_no_partial_output() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("symtab.json");
    fs::write(&path, "{ not json").expect("write");

    assert_cmd::cargo::cargo_bin_cmd!("symtab-lens")
        .arg("list")
        .arg("--input")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_successor_references_fail_before_reporting() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("symtab.json");
    fs::write(
        &path,
        r#"{ "functions": [{ "name": "f", "blocks": [{ "label": "a", "succs": ["b"] }] }] }"#,
    )
    .expect("write");

    assert_cmd::cargo::cargo_bin_cmd!("symtab-lens")
        .arg("stats")
        .arg("--input")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown successor"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_subcommand_shows_usage() {
    assert_cmd::cargo::cargo_bin_cmd!("symtab-lens")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
