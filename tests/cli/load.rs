//! Tests for `routegraph load` command

use crate::support::{routegraph, stdout_json, with_fixture, write_routes};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_load_fixture() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .arg("load")
        .assert()
        .success()
        .stdout("Loaded 9 routes between 5 nodes\n");
}

#[test]
fn test_load_skips_malformed_tokens() {
    let dir = tempdir().unwrap();
    let routes = write_routes(dir.path(), "AB5, B?4, CD8,, XY0");

    let output = routegraph()
        .arg("--routes")
        .arg(&routes)
        .args(["--format", "json", "load"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["routes_added"], 2);
    assert_eq!(json["nodes"], 4);
    assert_eq!(json["strict"], false);

    let diagnostics = json["diagnostics"].as_array().unwrap();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0]["token"], "B?4");
    assert_eq!(diagnostics[0]["position"], 2);
    assert_eq!(diagnostics[1]["token"], "XY0");
}

#[test]
fn test_load_records_lists_skipped_tokens() {
    let dir = tempdir().unwrap();
    let routes = write_routes(dir.path(), "AB5,B?4");

    routegraph()
        .arg("--routes")
        .arg(&routes)
        .args(["--format", "records", "load"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mode=load status=ok routes_added=1 nodes=2 skipped=1",
        ))
        .stdout(predicate::str::contains(
            "D warning invalid-route position=2 \"B?4\"",
        ));
}

#[test]
fn test_load_strict_fails_on_bad_token() {
    let dir = tempdir().unwrap();
    let routes = write_routes(dir.path(), "AB5, B?4");

    routegraph()
        .arg("--routes")
        .arg(&routes)
        .args(["--strict", "load"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid route \"B?4\""));
}

#[test]
fn test_load_duplicate_route_is_data_error() {
    let dir = tempdir().unwrap();
    let routes = write_routes(dir.path(), "AB5, AB6");

    routegraph()
        .arg("--routes")
        .arg(&routes)
        .arg("load")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("route already exists"));
}

#[test]
fn test_load_self_loop_is_data_error() {
    let dir = tempdir().unwrap();
    let routes = write_routes(dir.path(), "AA5");

    routegraph()
        .arg("--routes")
        .arg(&routes)
        .arg("load")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "start and end nodes cannot be the same",
        ));
}

#[test]
fn test_load_empty_file() {
    let dir = tempdir().unwrap();
    let routes = write_routes(dir.path(), "");

    routegraph()
        .arg("--routes")
        .arg(&routes)
        .arg("load")
        .assert()
        .success()
        .stdout("Loaded 0 routes between 0 nodes\n");
}
