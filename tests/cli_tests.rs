//! CLI tests - exercise the binary end to end with assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd_in(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("styrcykel").unwrap();
    cmd.current_dir(root);
    cmd
}

fn write_fixture_root(root: &Path) {
    let sheet = root.join("data/source/2026/events_master.xlsx");
    fs::create_dir_all(sheet.parent().unwrap()).unwrap();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Verksamhetscykel").unwrap();
    for (col, header) in ["Cykeldatum", "Styrningsfas", "Typ", "Synlig"]
        .iter()
        .enumerate()
    {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    worksheet.write_string(1, 0, "2026-03-14").unwrap();
    worksheet.write_string(1, 1, "Planering").unwrap();
    worksheet.write_string(1, 2, "Beslut").unwrap();
    worksheet.write_string(1, 3, "Ja").unwrap();
    workbook.save(&sheet).unwrap();

    let base = root.join("data/generated/2026/events.json");
    fs::create_dir_all(base.parent().unwrap()).unwrap();
    fs::write(
        &base,
        serde_json::to_string_pretty(&json!({"config": {"year": 2026}, "events": []})).unwrap(),
    )
    .unwrap();
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("styrcykel")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--init"));
}

#[test]
fn test_cli_version() {
    Command::cargo_bin("styrcykel")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("styrcykel"));
}

#[test]
fn test_default_mode_updates_json() {
    let dir = TempDir::new().unwrap();
    write_fixture_root(dir.path());

    cmd_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 events written"));

    let canonical = fs::read(dir.path().join("data/generated/2026/events.json")).unwrap();
    let mirror = fs::read(dir.path().join("web-data/2026/events.json")).unwrap();
    assert_eq!(canonical, mirror);
}

#[test]
fn test_init_mode_creates_spreadsheet() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("data/generated/2026/events.json");
    fs::create_dir_all(base.parent().unwrap()).unwrap();
    fs::write(
        &base,
        serde_json::to_string_pretty(&json!({
            "events": [{
                "date": "2026-03-14",
                "ring": "planering",
                "ring_2": null,
                "type": "beslut",
                "label": "X",
                "placering": "center",
                "visible": true,
                "id": "ev_0"
            }]
        }))
        .unwrap(),
    )
    .unwrap();

    cmd_in(dir.path())
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spreadsheet created"));

    assert!(dir.path().join("data/source/2026/events_master.xlsx").exists());
}

#[test]
fn test_missing_spreadsheet_fails_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("data/generated/2026/events.json");
    fs::create_dir_all(base.parent().unwrap()).unwrap();
    fs::write(&base, r#"{"events": []}"#).unwrap();

    cmd_in(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_missing_json_fails_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();

    cmd_in(dir.path())
        .arg("--init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let dir = TempDir::new().unwrap();
    cmd_in(dir.path()).arg("--frobnicate").assert().failure();
}
