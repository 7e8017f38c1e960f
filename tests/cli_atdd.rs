#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn supeval(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("supeval").expect("binary should compile");
    cmd.arg("--root")
        .arg(root)
        .env("HOME", root)
        .env_remove("RUST_LOG");
    cmd
}

fn add(root: &Path, supplier: &str, ratings: [&str; 4]) -> Command {
    let mut cmd = supeval(root);
    cmd.args(["add", "--supplier", supplier, "--date", "2025-09-25"])
        .args(["--quality", ratings[0]])
        .args(["--delivery", ratings[1]])
        .args(["--price", ratings[2]])
        .args(["--service", ratings[3]]);
    cmd
}

fn read_log(root: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(root.join("evaluations.json")).expect("log should exist");
    serde_json::from_str(&raw).expect("log should be valid json")
}

#[test]
fn score_previews_excellent_boundary() {
    let root = TempDir::new().expect("temp dir should be created");
    supeval(root.path())
        .args([
            "score",
            "--quality",
            "5",
            "--delivery",
            "4",
            "--price",
            "4",
            "--service",
            "5",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Overall score: 4.50 / 5"))
        .stdout(predicate::str::contains("(Excellent)"));
    assert!(!root.path().join("evaluations.json").exists());
}

#[test]
fn score_json_reports_very_good() {
    let root = TempDir::new().expect("temp dir should be created");
    let output = supeval(root.path())
        .args([
            "score",
            "--quality",
            "4",
            "--delivery",
            "5",
            "--price",
            "3",
            "--service",
            "4",
            "--format",
            "json",
        ])
        .output()
        .expect("score should run");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["score"], 4.1);
    assert_eq!(value["status"], "very_good");
    assert_eq!(value["weights"]["quality"], 0.4);
}

#[test]
fn score_rejects_out_of_range_rating_by_default() {
    let root = TempDir::new().expect("temp dir should be created");
    supeval(root.path())
        .args([
            "score",
            "--quality",
            "6",
            "--delivery",
            "4",
            "--price",
            "4",
            "--service",
            "4",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("quality rating out of range"));
}

#[test]
fn clamp_policy_from_config_pulls_ratings_into_range() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(
        root.path().join("supeval.toml"),
        r#"
[ratings]
policy = "clamp"
"#,
    )
    .expect("config should write");

    supeval(root.path())
        .args([
            "score",
            "--quality",
            "9",
            "--delivery",
            "5",
            "--price",
            "5",
            "--service",
            "-1",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Overall score: 4.60 / 5"));
}

#[test]
fn accept_policy_rejects_ratings_too_large_to_score() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(
        root.path().join("supeval.toml"),
        r#"
[ratings]
policy = "accept"
"#,
    )
    .expect("config should write");

    supeval(root.path())
        .args([
            "score",
            "--quality",
            "1e308",
            "--delivery",
            "1e308",
            "--price",
            "1e308",
            "--service",
            "1e308",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("too large to score"));

    add(root.path(), "Suministros ABC", ["1e308", "4", "4", "4"])
        .assert()
        .code(2);
    assert!(!root.path().join("evaluations.json").exists());

    supeval(root.path())
        .args([
            "score",
            "--quality",
            "7",
            "--delivery",
            "5",
            "--price",
            "5",
            "--service",
            "5",
            "--format",
            "json",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 5.8"));
}

#[test]
fn global_config_is_read_from_home() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::create_dir_all(root.path().join(".config/supeval")).expect("global dir should create");
    fs::write(
        root.path().join(".config/supeval/config.toml"),
        r#"
[ratings]
policy = "clamp"
"#,
    )
    .expect("global config should write");
    fs::write(root.path().join("supeval.toml"), "").expect("repo config should write");

    supeval(root.path())
        .args([
            "score",
            "--quality",
            "9",
            "--delivery",
            "5",
            "--price",
            "5",
            "--service",
            "5",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Overall score: 5.00 / 5"));
}

#[test]
fn invalid_weights_config_is_a_runtime_failure() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(
        root.path().join("supeval.toml"),
        r#"
[weights]
quality = 0.90
"#,
    )
    .expect("config should write");

    supeval(root.path())
        .arg("summary")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("weights must sum to 1.0"));
}

#[test]
fn add_then_list_show_and_summary() {
    let root = TempDir::new().expect("temp dir should be created");

    add(root.path(), "Suministros ABC", ["5", "4", "4", "5"])
        .args(["--evaluator", "Laura", "--comment", "Entrega puntual"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Supplier: Suministros ABC"))
        .stdout(predicate::str::contains("Evaluator: Laura"));
    add(root.path(), "Logistica Express", ["4", "5", "3", "4"])
        .assert()
        .code(0);
    add(root.path(), "Materiales Premium", ["5", "3", "3", "3"])
        .assert()
        .code(0);

    let log = read_log(root.path());
    assert_eq!(log["version"], 1);
    let evaluations = log["evaluations"]
        .as_array()
        .expect("evaluations should be an array");
    assert_eq!(evaluations.len(), 3);
    assert_eq!(evaluations[0]["supplier"], "Materiales Premium");
    assert_eq!(evaluations[2]["score"], 4.5);
    let first_id = evaluations[2]["id"]
        .as_str()
        .expect("id should be a string")
        .to_string();

    supeval(root.path())
        .args(["list", "--search", "express"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Logistica Express"))
        .stdout(predicate::str::contains("Showing 1 of 3 evaluations"));

    supeval(root.path())
        .args(["list", "--status", "very_good"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Logistica Express"))
        .stdout(predicate::str::contains("Suministros ABC").not());

    supeval(root.path())
        .args(["show", &first_id])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Date: 25/09/2025"))
        .stdout(predicate::str::contains("> Entrega puntual"));

    supeval(root.path())
        .arg("summary")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("General average: 4.13 / 5"))
        .stdout(predicate::str::contains(
            "Top supplier: Suministros ABC (4.50, Excellent)",
        ))
        .stdout(predicate::str::contains("- Good: 1 (33.3%)"));
}

#[test]
fn add_rejects_bad_date_without_touching_log() {
    let root = TempDir::new().expect("temp dir should be created");
    supeval(root.path())
        .args([
            "add",
            "--supplier",
            "Suministros ABC",
            "--date",
            "2025-13-40",
            "--quality",
            "5",
            "--delivery",
            "4",
            "--price",
            "4",
            "--service",
            "5",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid date"));
    assert!(!root.path().join("evaluations.json").exists());
}

#[test]
fn add_rejects_blank_supplier() {
    let root = TempDir::new().expect("temp dir should be created");
    add(root.path(), "   ", ["5", "4", "4", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("supplier name must not be empty"));
}

#[test]
fn summary_of_empty_log_warns_without_top_supplier() {
    let root = TempDir::new().expect("temp dir should be created");
    supeval(root.path())
        .args(["summary", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"top_performer\": null"))
        .stdout(predicate::str::contains("\"general_average\": 0.0"));
}

#[test]
fn list_with_no_matches_warns() {
    let root = TempDir::new().expect("temp dir should be created");
    add(root.path(), "Suministros ABC", ["5", "4", "4", "5"])
        .assert()
        .code(0);
    supeval(root.path())
        .args(["list", "--search", "nobody"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Showing 0 of 1 evaluations"));
}

#[test]
fn show_unknown_id_is_invalid_input() {
    let root = TempDir::new().expect("temp dir should be created");
    supeval(root.path())
        .args(["show", "deadbeef0000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("evaluation not found: deadbeef0000"));
}

#[test]
fn corrupt_log_is_a_runtime_failure() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(root.path().join("evaluations.json"), "[1, 2").expect("log should write");
    supeval(root.path())
        .arg("summary")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("evaluation log is corrupt"));
}

#[test]
fn store_path_is_configurable() {
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(
        root.path().join("supeval.toml"),
        r#"
[store]
path = "data/history.json"
"#,
    )
    .expect("config should write");

    add(root.path(), "Suministros ABC", ["5", "4", "4", "5"])
        .assert()
        .code(0);
    assert!(root.path().join("data/history.json").exists());
    assert!(!root.path().join("evaluations.json").exists());
}
