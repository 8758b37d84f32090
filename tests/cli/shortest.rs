//! Tests for `routegraph shortest` command

use crate::support::{stdout_json, with_fixture};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_shortest_a_to_c() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["shortest", "A", "C"])
        .assert()
        .success()
        .stdout("A-B-C (9)\n");
}

#[test]
fn test_shortest_b_to_b_is_a_cycle() {
    let dir = tempdir().unwrap();

    let output = with_fixture(dir.path())
        .args(["--format", "json", "shortest", "B", "B"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 9);
    assert_eq!(json["path"], serde_json::json!(["b", "c", "e", "b"]));
}

#[test]
fn test_shortest_unreachable() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["shortest", "C", "A"])
        .assert()
        .success()
        .stdout("NO SUCH ROUTE\n");
}

#[test]
fn test_shortest_records_unreachable() {
    let dir = tempdir().unwrap();

    with_fixture(dir.path())
        .args(["--format", "records", "shortest", "C", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found=false"))
        .stdout(predicate::str::contains("P path=").not());
}
