//! End-to-end runs of the `lighthouse` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn write_lookups(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lighthouse_cli_{name}_{}", std::process::id()));
    let _ = fs::create_dir_all(&dir);
    let path = dir.join("lookups.json");
    fs::write(
        &path,
        r#"{
            "robots": {"BKRB0001": "uuid-123"},
            "source_plates": {"plate-1": "plate-uuid"},
            "samples": {
                "plate-uuid": [{
                    "Root Sample ID": "MCM001",
                    "RNA ID": "plate-1_A01",
                    "Lab ID": "Lab 1",
                    "Result": "Positive",
                    "lh_sample_uuid": "sample-uuid"
                }]
            }
        }"#,
    )
    .unwrap_or_else(|e| panic!("Failed to write lookups file: {e}"));
    path
}

fn lighthouse() -> Command {
    let mut cmd = Command::cargo_bin("lighthouse")
        .unwrap_or_else(|e| panic!("lighthouse binary not built: {e}"));
    cmd.env_remove("RMQ_LIMS_ID").env("RUST_LOG", "off");
    cmd
}

#[test]
fn source_not_recognised_prints_message() {
    let lookups = write_lookups("not_recognised");

    lighthouse()
        .args(["event", "source_not_recognised", "--user-id", "u1", "--robot", "BKRB0001"])
        .arg("--lookups")
        .arg(&lookups)
        .env("RMQ_LIMS_ID", "LH_TEST")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"event_type\": \"source_not_recognised\"")
                .and(predicate::str::contains("\"lims\": \"LH_TEST\""))
                .and(predicate::str::contains("\"uuid\": \"uuid-123\"")),
        );
}

#[test]
fn source_completed_includes_samples() {
    let lookups = write_lookups("completed");

    let output = lighthouse()
        .args(["event", "source_completed", "--lims-id", "LH_TEST"])
        .args(["--barcode", "plate-1", "--user-id", "u1", "--robot", "BKRB0001"])
        .arg("--lookups")
        .arg(&lookups)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let message: serde_json::Value =
        serde_json::from_slice(&output).unwrap_or_else(|e| panic!("stdout is not JSON: {e}"));
    let subjects = message["event"]["subjects"]
        .as_array()
        .unwrap_or_else(|| panic!("subjects missing: {message}"));
    assert_eq!(subjects.len(), 3);
    assert_eq!(subjects[2]["friendly_name"], "MCM001__plate-1_A01__Lab 1__Positive");
}

#[test]
fn missing_fields_fail_with_message() {
    let lookups = write_lookups("missing");

    lighthouse()
        .args(["event", "source_all_negatives", "--lims-id", "LH_TEST", "--robot", "BKRB0001"])
        .arg("--lookups")
        .arg(&lookups)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'barcode', 'user_id' and 'robot' are required to construct a source_all_negatives event message",
        ));
}

#[test]
fn unknown_event_type_fails() {
    let lookups = write_lookups("unknown");

    lighthouse()
        .args(["event", "bogus_event", "--lims-id", "LH_TEST"])
        .args(["--param", "barcode=plate-1"])
        .arg("--lookups")
        .arg(&lookups)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognised event type 'bogus_event'"));
}

#[test]
fn event_types_lists_all_four() {
    lighthouse().arg("event-types").assert().success().stdout(
        predicate::str::contains("source_completed\tbarcode,user_id,robot")
            .and(predicate::str::contains("source_not_recognised\tuser_id,robot"))
            .and(predicate::str::contains("source_no_map_data"))
            .and(predicate::str::contains("source_all_negatives")),
    );
}
