// SPDX-License-Identifier: Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::tempdir;

fn pincode_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data/pincode.csv")
}

fn assess(sample_type: &str, values: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jalmitr"));
    cmd.env_remove("RUST_LOG")
        .env_remove("JALMITR_LANG")
        .env_remove("JALMITR_LOG_JSON")
        .args(["assess", "--pincode", "110001", "--sample-type", sample_type])
        .arg("--pincode-csv")
        .arg(pincode_csv());
    for v in values {
        cmd.arg("--value").arg(v);
    }
    cmd
}

const CLEAN_TAP_WATER: &[&str] = &["pH=7.1", "TDS=350", "Iron=0.1", "Fluoride=0.5", "Lead=0"];

#[test]
fn safe_drinking_water_reports_location_and_verdict() {
    assess("tap-water", CLEAN_TAP_WATER)
        .assert()
        .success()
        .stdout(predicate::str::contains("- District: Central Delhi"))
        .stdout(predicate::str::contains("Type of Sample: TAP WATER"))
        .stdout(predicate::str::contains(
            "All parameters are within safe limits. Water is SAFE.",
        ))
        .stdout(predicate::str::contains("General Water Advice:"));
}

#[test]
fn unsafe_result_still_exits_zero() {
    assess(
        "ground-water",
        &["pH=7.0", "TDS=2500", "Iron=0.8", "Nitrate=5", "Lead=0"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("Unsafe: values out of standard. TDS, Iron"))
    .stdout(predicate::str::contains("- TDS High: Use RO purifier."))
    .stdout(predicate::str::contains("- Iron High: Install iron removal filter."));
}

#[test]
fn json_report_is_canonical_and_complete() {
    let output = assess("tap-water", CLEAN_TAP_WATER)
        .arg("--json")
        .output()
        .expect("run assess");
    assert!(output.status.success());
    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let report = &payload["report"];
    assert_eq!(report["verdict"], "safe");
    assert_eq!(report["rows"].as_array().map(Vec::len), Some(31));
    assert_eq!(report["location"]["state"], "DELHI");
    assert_eq!(report["rows_sha256"].as_str().map(str::len), Some(64));
    assert!(report["notices"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn missing_tds_is_a_validation_error() {
    assess("river-water", &["pH=7.0", "Iron=0.1", "Lead=0", "DO=4", "BOD=2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("TDS value is compulsory!"));
}

#[test]
fn missing_tds_json_error_carries_code() {
    assess("river-water", &["pH=7.0"])
        .arg("--json")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("compulsory_parameter_missing"));
}

#[test]
fn effluent_needs_three_parameters() {
    assess("stp-etp", &["pH=7.0", "BOD=5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Please fill at least 3 parameters for prediction.",
        ));
}

#[test]
fn failing_effluent_prints_problems_and_closing_note() {
    assess("stp-etp", &["pH=7.0", "BOD=25", "COD=40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STP/ETP Problems found: BOD"))
        .stdout(predicate::str::contains(
            "Plant operator training & maintenance required.",
        ));
}

#[test]
fn out_of_range_value_is_rejected() {
    assess("stp-etp", &["pH=15", "BOD=5", "COD=20"])
        .arg("--json")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid_value"));
}

#[test]
fn malformed_value_argument_is_rejected() {
    assess("stp-etp", &["pH:7"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("expected NAME=VALUE"));
}

#[test]
fn hindi_labels_are_used_when_requested() {
    assess("tap-water", CLEAN_TAP_WATER)
        .args(["--lang", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- जनपद: Central Delhi"))
        .stdout(predicate::str::contains("✔️ पास"));
}

#[test]
fn unknown_pincode_adds_notice_but_still_reports() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jalmitr"));
    cmd.env_remove("RUST_LOG")
        .env_remove("JALMITR_LANG")
        .args(["--json", "assess", "--pincode", "999999", "--sample-type", "ro-water"])
        .arg("--pincode-csv")
        .arg(pincode_csv());
    for v in CLEAN_TAP_WATER {
        cmd.arg("--value").arg(v);
    }
    let output = cmd.output().expect("run assess");
    assert!(output.status.success());
    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert!(payload["report"]["location"].is_null());
    assert_eq!(payload["report"]["notices"][0], "Pincode not found in file!");
}

#[test]
fn unreadable_pincode_directory_is_a_dependency_failure() {
    let tmp = tempdir().expect("tmp");
    Command::new(env!("CARGO_BIN_EXE_jalmitr"))
        .env_remove("RUST_LOG")
        .args(["--json", "assess", "--pincode", "110001", "--sample-type", "stp"])
        .args(["--value", "pH=7", "--value", "BOD=5", "--value", "COD=20"])
        .arg("--pincode-csv")
        .arg(tmp.path().join("absent.csv"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("pincode_directory_unavailable"));
}

#[test]
fn input_file_values_are_overridden_by_flags_and_exported() {
    let tmp = tempdir().expect("tmp");
    let input = tmp.path().join("sample.json");
    std::fs::write(&input, r#"{"ph": 7.0, "bod": 25, "cod": 40}"#).expect("write input");
    let export = tmp.path().join("out").join("report.csv");

    assess("stp-etp", &["BOD=5"])
        .arg("--input")
        .arg(&input)
        .arg("--export")
        .arg(&export)
        .assert()
        .success()
        .stdout(predicate::str::contains("Your STP/ETP water is within CPCB limits."));

    let csv = std::fs::read_to_string(&export).expect("read export");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Parameter,Your Value,Standard,Status,Advice"));
    assert_eq!(lines.next(), Some("pH,7.0,6.5–8.5,✔️ Pass,"));
    assert_eq!(lines.next(), Some("BOD,5.0,≤ 10.0,✔️ Pass,"));
    assert_eq!(csv.lines().count(), 12);
}

#[test]
fn lookup_prints_location() {
    Command::new(env!("CARGO_BIN_EXE_jalmitr"))
        .env_remove("JALMITR_LANG")
        .args(["lookup", "--pincode", " 400001 "])
        .arg("--pincode-csv")
        .arg(pincode_csv())
        .assert()
        .success()
        .stdout(predicate::str::contains("- Office: Fort, Mumbai G.P.O."));
}

#[test]
fn sample_type_display_label_is_accepted() {
    assess("STP/ETP", &["pH=7.0", "BOD=5", "COD=20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type of Sample: STP/ETP"))
        .stdout(predicate::str::contains("Your STP/ETP water is within CPCB limits."));
    assess("GROUND WATER", CLEAN_TAP_WATER)
        .assert()
        .success()
        .stdout(predicate::str::contains("Type of Sample: GROUND WATER"));
}

fn assess_with_pincode(pincode: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_jalmitr"));
    cmd.env_remove("RUST_LOG")
        .env_remove("JALMITR_LANG")
        .args(["--json", "assess", "--pincode", pincode, "--sample-type", "stp"])
        .args(["--value", "pH=7", "--value", "BOD=5", "--value", "COD=20"])
        .arg("--pincode-csv")
        .arg(pincode_csv());
    cmd
}

#[test]
fn punctuated_pincode_reports_with_not_found_notice() {
    for pincode in ["110-001", "110 001"] {
        let output = assess_with_pincode(pincode).output().expect("run assess");
        assert!(output.status.success(), "{pincode}");
        let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
        assert_eq!(payload["report"]["pincode"], pincode);
        assert!(payload["report"]["location"].is_null());
        assert_eq!(payload["report"]["notices"][0], "Pincode not found in file!");
        assert_eq!(payload["report"]["verdict"], "compliant");
    }
}

#[test]
fn blank_pincode_asks_for_one() {
    assess_with_pincode("   ")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("pincode_required"))
        .stderr(predicate::str::contains("Pincode (Required):"));
}

#[test]
fn malformed_input_file_is_a_validation_error() {
    let tmp = tempdir().expect("tmp");
    let input = tmp.path().join("sample.json");
    std::fs::write(&input, r#"{"pH": 7.0, "BOD": "#).expect("write input");
    assess("stp-etp", &[])
        .arg("--json")
        .arg("--input")
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid_input"));
}

#[test]
fn missing_input_file_is_a_dependency_failure() {
    let tmp = tempdir().expect("tmp");
    assess("stp-etp", &[])
        .arg("--json")
        .arg("--input")
        .arg(tmp.path().join("absent.toml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("input_unreadable"));
}

#[test]
fn lookup_json_carries_directory_digest() {
    let output = Command::new(env!("CARGO_BIN_EXE_jalmitr"))
        .env_remove("JALMITR_LANG")
        .args(["--json", "lookup", "--pincode", "560001"])
        .arg("--pincode-csv")
        .arg(pincode_csv())
        .output()
        .expect("run lookup");
    assert!(output.status.success());
    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(payload["found"], true);
    assert_eq!(payload["directory_sha256"].as_str().map(str::len), Some(64));
}
