//! Tests for `routegraph distance` command

use crate::support::{stdout_json, with_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_distance_fixture_routes() {
    let dir = tempdir().unwrap();

    for (route, expected) in [
        ("A-B-C", "9"),
        ("A-D", "5"),
        ("A-D-C", "13"),
        ("A-E-B-C-D", "22"),
    ] {
        with_fixture(dir.path())
            .args(["distance", route])
            .assert()
            .success()
            .stdout(format!("{}\n", expected));
    }
}

#[test]
fn test_distance_no_such_route_is_success() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["distance", "A-E-D"])
        .assert()
        .success()
        .stdout("NO SUCH ROUTE\n");
}

#[test]
fn test_distance_labels_are_case_insensitive() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["distance", "a-b-c"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_distance_same_node_is_zero() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["distance", "C-C"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_distance_json() {
    let dir = tempdir().unwrap();

    let output = with_fixture(dir.path())
        .args(["--format", "json", "distance", "A-E-B-C-D"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["distance"], 22);
    assert_eq!(json["route"], serde_json::json!(["a", "e", "b", "c", "d"]));
}

#[test]
fn test_distance_json_no_such_route() {
    let dir = tempdir().unwrap();

    let output = with_fixture(dir.path())
        .args(["--format", "json", "distance", "A-E-D"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json["distance"].is_null());
    assert_eq!(json["message"], "NO SUCH ROUTE");
}

#[test]
fn test_distance_records() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["--format", "records", "distance", "A-D-C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=distance route=a-d-c"))
        .stdout(predicate::str::contains("R distance=13"));
}

#[test]
fn test_distance_single_node_is_usage_error() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["distance", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("start and destination"));
}
