//! Tests for config file discovery and overrides

use crate::support::{routegraph, stdout_json, with_fixture, write_routes};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_next_to_routes_sets_format() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("routegraph.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = with_fixture(dir.path())
        .args(["distance", "A-B-C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["distance"], 9);
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("routegraph.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    with_fixture(dir.path())
        .args(["--format", "human", "distance", "A-B-C"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_config_delimiter() {
    let dir = tempdir().unwrap();
    let routes = write_routes(dir.path(), "AB5;BC4;CD8");
    fs::write(
        dir.path().join("routegraph.toml"),
        "[loader]\ndelimiter = \";\"\n",
    )
    .unwrap();

    routegraph()
        .arg("--routes")
        .arg(&routes)
        .args(["distance", "A-B-C-D"])
        .assert()
        .success()
        .stdout("17\n");
}

#[test]
fn test_config_strict_from_file() {
    let dir = tempdir().unwrap();
    let routes = write_routes(dir.path(), "AB5, nonsense");
    fs::write(dir.path().join("routegraph.toml"), "[loader]\nstrict = true\n").unwrap();

    routegraph()
        .arg("--routes")
        .arg(&routes)
        .arg("load")
        .assert()
        .code(3);
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("custom.toml");
    fs::write(&config_path, "[output]\nformat = \"records\"\n").unwrap();

    with_fixture(dir.path())
        .arg("--config")
        .arg(&config_path)
        .args(["distance", "A-D"])
        .assert()
        .success()
        .stdout(predicates::str::contains("R distance=5"));
}

#[test]
fn test_invalid_config_delimiter_is_usage_error() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("routegraph.toml"),
        "[loader]\ndelimiter = \"x\"\n",
    )
    .unwrap();

    with_fixture(dir.path())
        .arg("load")
        .assert()
        .code(2);
}

#[test]
fn test_malformed_config_is_failure() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("routegraph.toml"), "[output\n").unwrap();

    with_fixture(dir.path())
        .arg("load")
        .assert()
        .code(1);
}
