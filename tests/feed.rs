use std::path::PathBuf;

use innings_terminal::feed::{DEMO_SOURCE, load_records};

fn fixture_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

#[test]
fn loads_records_from_a_local_path() {
    let path = fixture_path("innings.csv");
    let records = load_records(path.to_str().expect("fixture path should be utf-8"))
        .expect("fixture should load");
    assert_eq!(records.len(), 5);
    assert_eq!(records[1].runs, 102);
}

#[test]
fn demo_source_yields_a_full_career() {
    let records = load_records(DEMO_SOURCE).expect("demo source should always load");
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| r.date.is_some() && r.year.is_some()));
}

#[test]
fn missing_path_is_a_load_failure() {
    let path = fixture_path("does_not_exist.csv");
    assert!(load_records(path.to_str().expect("fixture path should be utf-8")).is_err());
}
