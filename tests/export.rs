use std::env;
use std::fs;
use std::path::PathBuf;

use innings_terminal::export::{export_workbook, write_summary_json};
use innings_terminal::record::parse_batting_csv;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn workbook_export_writes_all_sheets() {
    let records = parse_batting_csv(&read_fixture("innings.csv"));
    let path = env::temp_dir().join("innings_terminal_export_test.xlsx");

    let report = export_workbook(&path, &records).expect("export should succeed");
    assert_eq!(report.innings, 5);
    assert_eq!(report.sheets, 5);
    assert!(path.exists());

    let _ = fs::remove_file(path);
}

#[test]
fn summary_snapshot_round_trips_as_json() {
    let records = parse_batting_csv(&read_fixture("innings.csv"));
    let path = env::temp_dir().join("innings_terminal_snapshot_test.json");

    write_summary_json(&path, "innings.csv", &records).expect("snapshot should succeed");
    let raw = fs::read_to_string(&path).expect("snapshot should be readable");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("snapshot should be json");

    assert_eq!(value["source"], "innings.csv");
    assert_eq!(value["summary"]["matches"], 5);
    assert_eq!(value["summary"]["runs"], 355);
    assert_eq!(value["summary"]["centuries"], 2);
    assert_eq!(value["runs_by_opponent"][0][0], "Australia");
    assert_eq!(value["runs_by_opponent"][0][1], 145);

    let _ = fs::remove_file(path);
}
