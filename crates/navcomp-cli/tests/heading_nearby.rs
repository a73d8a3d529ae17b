use predicates::prelude::*;

mod common;

use common::prepare_command;

#[test]
fn heading_lists_bodies_in_order() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "heading", "--x", "0", "--y", "0", "--z", "0", "--yaw", "0", "--pitch", "0", "--speed",
        "5",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("within radius 0"))
        .stdout(predicate::str::is_match(r"(?s)Vulcan.*Boreth").expect("regex"));
}

#[test]
fn heading_accepts_negative_coordinates_and_frames() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "heading",
        "--x",
        "-100",
        "--y",
        "0",
        "--z",
        "0",
        "--yaw",
        "0",
        "--pitch",
        "0",
        "--frame",
        "federation",
        "--same-body-distance",
        "1",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Vulcan"))
        .stdout(predicate::str::contains("Earth").not());
}

#[test]
fn heading_with_nothing_ahead_fails() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "heading", "--x", "0", "--y", "500", "--z", "0", "--yaw", "0", "--pitch", "90",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no bodies found along line"));
}

#[test]
fn heading_unknown_frame_fails() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args([
        "heading", "--x", "0", "--y", "0", "--z", "0", "--yaw", "0", "--pitch", "0", "--frame",
        "romulan",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unable to find frame romulan"));
}

#[test]
fn nearby_merges_ties() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["nearby", "Earth", "--range", "10"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Objects near Earth:"))
        .stdout(predicate::str::contains("Luna, Earth Spacedock"))
        .stdout(predicate::str::contains("Vulcan"))
        .stdout(predicate::str::contains("Boreth").not());
}

#[test]
fn nearby_limit_out_of_range_is_rejected() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["nearby", "Earth", "--limit", "0"]);

    cmd.assert().failure();
}

#[test]
fn nearby_json_rows() {
    let (mut cmd, _temp) = prepare_command();
    cmd.args(["--format", "json", "nearby", "Earth", "--range", "10", "--limit", "2"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    let rows = value["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["name"], "Luna, Earth Spacedock");
}
