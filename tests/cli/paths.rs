//! Tests for `routegraph paths` command

use crate::support::{stdout_json, with_fixture};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_paths_max_stops() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["paths", "C", "C", "--max-stops", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C-D-C (16)"))
        .stdout(predicate::str::contains("C-E-B-C (9)"))
        .stdout(predicate::str::contains("2 trips from C to C"));
}

#[test]
fn test_paths_exact_stops_json() {
    let dir = tempdir().unwrap();

    let output = with_fixture(dir.path())
        .args(["--format", "json", "paths", "A", "C", "--exact-stops", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["count"], 3);
    assert_eq!(json["bound"], serde_json::json!({"exact_stops": 4}));
    let paths = json["paths"].as_array().unwrap();
    assert!(paths.contains(&serde_json::json!({"path": ["a", "d", "e", "b", "c"], "cost": 18})));
    assert!(paths.contains(&serde_json::json!({"path": ["a", "b", "c", "d", "c"], "cost": 25})));
}

#[test]
fn test_paths_max_distance() {
    let dir = tempdir().unwrap();

    let output = with_fixture(dir.path())
        .args(["--format", "json", "paths", "C", "C", "--max-distance", "30"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["count"], 7);
    assert!(json["paths"]
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["cost"].as_u64().unwrap() < 30));
}

#[test]
fn test_paths_records() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["--format", "records", "paths", "C", "C", "--max-stops", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mode=paths from=c to=c max_stops=3 count=2",
        ))
        .stdout(predicate::str::contains("P path=c-d-c cost=16"))
        .stdout(predicate::str::contains("P path=c-e-b-c cost=9"));
}

#[test]
fn test_paths_none_found() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["paths", "C", "A", "--max-stops", "5"])
        .assert()
        .success()
        .stdout("0 trips from C to A\n");
}

#[test]
fn test_paths_requires_a_bound() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["paths", "C", "C"])
        .assert()
        .code(2);
}

#[test]
fn test_paths_rejects_two_bounds() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["paths", "C", "C", "--max-stops", "3", "--exact-stops", "2"])
        .assert()
        .code(2);
}

#[test]
fn test_paths_oversized_stop_bound_is_usage_error() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["paths", "C", "C", "--max-stops", "40"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("query.max_stops = 30"));

    with_fixture(dir.path())
        .args(["paths", "A", "C", "--exact-stops", "31"])
        .assert()
        .code(2);
}

#[test]
fn test_paths_oversized_distance_bound_is_usage_error() {
    let dir = tempdir().unwrap();

    // Minimum weight 2: a cap of 100 means 50 stops
    let output = with_fixture(dir.path())
        .args(["--format", "json", "paths", "C", "C", "--max-distance", "100"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_value");
}

#[test]
fn test_paths_stop_cap_from_config() {
    let dir = tempdir().unwrap();

    let mut query = toml::Table::new();
    query.insert("max_stops".to_string(), toml::Value::Integer(4));
    let mut config = toml::Table::new();
    config.insert("query".to_string(), toml::Value::Table(query));
    fs::write(
        dir.path().join("routegraph.toml"),
        toml::to_string(&config).unwrap(),
    )
    .unwrap();

    with_fixture(dir.path())
        .args(["paths", "A", "C", "--exact-stops", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 trips from A to C"));

    with_fixture(dir.path())
        .args(["paths", "A", "C", "--exact-stops", "5"])
        .assert()
        .code(2);

    // 10 / 2 = 5 stops
    with_fixture(dir.path())
        .args(["paths", "C", "C", "--max-distance", "10"])
        .assert()
        .code(2);
}
