use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/harbor_map.json")
}

fn cli() -> Command {
    Command::cargo_bin("waypath-cli").expect("binary builds")
}

#[test]
fn route_prints_steps_and_cost() {
    cli()
        .args(["route", "--map"])
        .arg(fixture_path())
        .args(["--from", "Harbor", "--to", "Summit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Harbor"))
        .stdout(predicate::str::contains("Market"))
        .stdout(predicate::str::contains("Chapel"))
        .stdout(predicate::str::contains("Summit"))
        .stdout(predicate::str::contains("Total cost: 3.00"));
}

#[test]
fn route_json_output_is_parseable() {
    let output = cli()
        .args(["route", "--map"])
        .arg(fixture_path())
        .args(["--from", "Harbor", "--to", "Summit", "--format", "json"])
        .output()
        .expect("command runs");

    assert!(output.status.success());
    let plan: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(plan["algorithm"], "a-star");
    assert_eq!(plan["steps"].as_array().map(Vec::len), Some(4));
}

#[test]
fn route_with_dijkstra_algorithm() {
    cli()
        .args(["route", "--map"])
        .arg(fixture_path())
        .args(["--from", "Harbor", "--to", "Summit", "--algorithm", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route (dijkstra):"));
}

#[test]
fn unknown_waypoint_fails_with_suggestions() {
    cli()
        .args(["route", "--map"])
        .arg(fixture_path())
        .args(["--from", "Harbr", "--to", "Summit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown waypoint name"))
        .stderr(predicate::str::contains("Did you mean"));
}

#[test]
fn disconnected_route_fails() {
    cli()
        .args(["route", "--map"])
        .arg(fixture_path())
        .args(["--from", "Harbor", "--to", "Lighthouse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no route found"));
}

#[test]
fn info_reports_counts() {
    cli()
        .args(["info", "--map"])
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("5 waypoints"))
        .stdout(predicate::str::contains("10 links"));
}

#[test]
fn malformed_map_fails_with_context() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"{ not json").expect("write");

    cli()
        .args(["route", "--map"])
        .arg(file.path())
        .args(["--from", "A", "--to", "B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load map"));
}
