use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const SALON: &str = "Пн-Пт: 09:00-18:00, Сб: 10:00-16:00";

fn slots() -> Command {
    Command::cargo_bin("slots").unwrap()
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn suggest_wednesday_morning() {
    let output = slots()
        .args(["suggest", "--hours", SALON, "--now", "2026-10-21T10:00"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["suggested_date"], "2026-10-21");
    assert_eq!(json["suggested_time"], "11:30");
    assert_eq!(json["is_closed_now"], false);
}

#[test]
fn suggest_flags_override_defaults() {
    let output = slots()
        .args([
            "suggest",
            "--hours",
            SALON,
            "--now",
            "2026-10-21T10:00",
            "--lead",
            "30",
            "--step",
            "60",
            "--compact",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(stdout_json(&output)["suggested_time"], "11:00");
}

#[test]
fn suggest_reads_config_file() {
    let mut config = tempfile_with("[booking]\nlead_minutes = 120\n");
    config.flush().unwrap();

    let output = slots()
        .args([
            "suggest",
            "--hours",
            SALON,
            "--now",
            "2026-10-21T10:00",
            "--config",
        ])
        .arg(config.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(stdout_json(&output)["suggested_time"], "12:00");
}

#[test]
fn suggest_zero_step_fails() {
    slots()
        .args([
            "suggest",
            "--hours",
            SALON,
            "--now",
            "2026-10-21T10:00",
            "--step",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step_minutes must be greater than zero"));
}

#[test]
fn window_for_sunday_is_null() {
    slots()
        .args([
            "window",
            "--hours",
            SALON,
            "--date",
            "2026-10-25",
            "--compact",
        ])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn window_for_saturday() {
    slots()
        .args([
            "window",
            "--hours",
            SALON,
            "--date",
            "2026-10-24",
            "--compact",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""open_min":600"#))
        .stdout(predicate::str::contains(r#""close_min":960"#));
}

#[test]
fn window_rejects_bad_date() {
    slots()
        .args(["window", "--hours", SALON, "--date", "24.10.2026"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn hours_source_is_required() {
    slots()
        .args(["window", "--date", "2026-10-24"])
        .assert()
        .failure();
}

#[test]
fn check_rejects_closed_day() {
    slots()
        .args([
            "check",
            "--hours",
            SALON,
            "--date",
            "2026-10-25",
            "--time",
            "12:00",
            "--now",
            "2026-10-21T10:00",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("closed on 2026-10-25"));
}

#[test]
fn check_accepts_open_slot() {
    slots()
        .args([
            "check",
            "--hours",
            SALON,
            "--date",
            "2026-10-21",
            "--time",
            "11:30",
            "--now",
            "2026-10-21T10:00",
            "--compact",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""ok":true"#));
}

#[test]
fn parse_then_format_round_trip() {
    let output = slots()
        .args(["parse", "--hours", SALON])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let document = stdout_json(&output);
    assert_eq!(document["sun"]["closed"], true);
    assert_eq!(document["sat"]["open"], "10:00");

    let mut file = tempfile_with(&String::from_utf8(output).unwrap());
    file.flush().unwrap();

    slots()
        .args(["format", "--schedule"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(format!("{SALON}\n"));
}

#[test]
fn format_rejects_broken_document() {
    let document = r#"{
        "mon": {"open": "18:00", "close": "09:00"},
        "tue": {"closed": true},
        "wed": {"closed": true},
        "thu": {"closed": true},
        "fri": {"closed": true},
        "sat": {"open": "10:00", "close": "16:00"},
        "sun": {"closed": true}
    }"#;
    let file = tempfile_with(document);

    slots()
        .args(["format", "--schedule"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid rule for Пн"));
}

#[test]
fn format_accepts_closed_days_without_times() {
    let document = r#"{
        "mon": {"open": "09:00", "close": "18:00"},
        "tue": {"open": "09:00", "close": "18:00"},
        "wed": {"closed": true},
        "thu": {"closed": true},
        "fri": {"closed": true},
        "sat": {"closed": true},
        "sun": {"closed": true}
    }"#;
    let file = tempfile_with(document);

    slots()
        .args(["format", "--schedule"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Пн-Вт: 09:00-18:00\n");
}

#[test]
fn suggest_from_schedule_file() {
    let document = r#"{
        "mon": {"open": "09:00", "close": "18:00"},
        "tue": {"open": "09:00", "close": "18:00"},
        "wed": {"open": "09:00", "close": "18:00"},
        "thu": {"open": "09:00", "close": "18:00"},
        "fri": {"open": "09:00", "close": "18:00"},
        "sat": {"open": "10:00", "close": "16:00"},
        "sun": {"open": "09:00", "close": "18:00", "closed": true}
    }"#;
    let mut file = tempfile_with(document);
    file.flush().unwrap();

    let output = slots()
        .args(["suggest", "--now", "2026-10-24T15:40", "--schedule"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json = stdout_json(&output);
    assert_eq!(json["suggested_date"], "2026-10-26");
    assert_eq!(json["suggested_time"], "09:30");
    assert_eq!(json["kind"], "next_open_day");
}

fn tempfile_with(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}
