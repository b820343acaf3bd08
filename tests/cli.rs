//! End-to-end tests for the sortlines binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn run_sorts_stdin() {
    let mut cmd = cargo_bin_cmd!("sortlines");
    cmd.arg("run").arg("normal").write_stdin("pear\napple\nfig\n");
    cmd.assert().success().stdout("apple\nfig\npear\n");
}

#[test]
fn run_respects_selection() {
    let mut cmd = cargo_bin_cmd!("sortlines");
    cmd.args(["run", "reverse", "--selection", "2-4"])
        .write_stdin("header\na\nc\nb\nfooter\n");
    cmd.assert()
        .success()
        .stdout("header\nc\nb\na\nfooter\n");
}

#[test]
fn run_filters_blank_lines() {
    let mut cmd = cargo_bin_cmd!("sortlines");
    cmd.args(["run", "normal", "--filter-blank-lines"])
        .write_stdin("b\n\n  \na\n");
    cmd.assert().success().stdout("a\nb\n");
}

#[test]
fn run_shuffle_with_seed_is_reproducible() {
    let input: String = (0..20).map(|i| format!("{}\n", i)).collect();

    let first = cargo_bin_cmd!("sortlines")
        .args(["run", "shuffle", "--seed", "5"])
        .write_stdin(input.clone())
        .output()
        .unwrap();
    let second = cargo_bin_cmd!("sortlines")
        .args(["run", "shuffle", "--seed", "5"])
        .write_stdin(input)
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn run_in_place_rewrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list.txt");
    std::fs::write(&path, "item10\nitem2\nitem1\n").unwrap();

    let mut cmd = cargo_bin_cmd!("sortlines");
    cmd.arg("run").arg("natural").arg(&path).arg("--in-place");
    cmd.assert().success().stdout("");

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "item1\nitem2\nitem10\n"
    );
}

#[test]
fn run_reads_config_file() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[pipeline]\nfilter_blank_lines = true").unwrap();

    let mut cmd = cargo_bin_cmd!("sortlines");
    cmd.arg("run")
        .arg("unique")
        .arg("--config")
        .arg(config.path())
        .write_stdin("b\n\na\nb\n");
    cmd.assert().success().stdout("a\nb\n");
}

#[test]
fn run_unknown_operation_fails() {
    let mut cmd = cargo_bin_cmd!("sortlines");
    cmd.args(["run", "sideways"]).write_stdin("a\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Operation 'sideways' not found"));
}

#[test]
fn tree_prints_json() {
    let mut cmd = cargo_bin_cmd!("sortlines");
    cmd.args(["tree", "--format", "json"])
        .write_stdin("root\n  child\n");
    cmd.assert().success().stdout(
        predicate::str::contains("\"line\": \"root\"")
            .and(predicate::str::contains("\"indent_level\": 2")),
    );
}

#[test]
fn list_shows_operations() {
    let mut cmd = cargo_bin_cmd!("sortlines");
    cmd.arg("list");
    cmd.assert().success().stdout(
        predicate::str::contains("case-insensitive-unique")
            .and(predicate::str::contains("structural"))
            .and(predicate::str::contains("keep-unique")),
    );
}
