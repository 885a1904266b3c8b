use chrono::{Datelike, NaiveDate};
use innings_terminal::query::{HELP_TEXT, answer};
use innings_terminal::record::MatchRecord;

fn innings(match_no: u32, runs: u32, opponent: &str, date: &str) -> MatchRecord {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("test dates should be well-formed");
    MatchRecord {
        match_no,
        runs,
        opponent: opponent.to_string(),
        ground: "Delhi".to_string(),
        match_type: "ODI".to_string(),
        total: runs + 150,
        year: Some(date.year()),
        date: Some(date),
    }
}

fn career() -> Vec<MatchRecord> {
    vec![
        innings(1, 45, "Australia", "2008-08-18"),
        innings(2, 102, "England", "2009-01-02"),
        innings(3, 78, "Pakistan", "2009-03-15"),
        innings(4, 100, "Australia", "2010-01-10"),
        innings(5, 30, "Sri Lanka", "2010-07-28"),
    ]
}

#[test]
fn answers_every_intent() {
    let records = career();
    assert_eq!(
        answer("what are my total runs?", &records),
        "Total runs scored: 355"
    );
    assert_eq!(
        answer("what is the average runs per match", &records),
        "Average runs per match: 71.00"
    );
    assert_eq!(answer("highest score so far?", &records), "Highest score: 102");
    assert_eq!(
        answer("how many centuries have I hit", &records),
        "Number of centuries: 2"
    );
    assert_eq!(answer("and fifties?", &records), "Number of fifties: 1");
    assert_eq!(
        answer("how many matches in total", &records),
        "Total matches played: 5"
    );
    assert_eq!(
        answer("against which opponent did I score most runs", &records),
        "Most runs against Australia: 145"
    );
    assert_eq!(
        answer("which year brought the most runs", &records),
        "Most runs in 2009: 180"
    );
}

#[test]
fn unmatched_question_yields_help_verbatim() {
    let records = career();
    assert_eq!(answer("what is your name", &records), HELP_TEXT);
    assert_eq!(answer("", &records), HELP_TEXT);
    // Dataset-independent.
    assert_eq!(answer("what is your name", &[]), HELP_TEXT);
}

#[test]
fn precedence_resolves_overlapping_phrasing() {
    let records = career();
    // Contains "total", "matches" and "total runs"; the total-runs branch
    // is tested first.
    assert_eq!(
        answer("across all matches, what are my total runs?", &records),
        "Total runs scored: 355"
    );
    // "sum of runs" without the word "total".
    assert_eq!(answer("sum of runs?", &records), "Total runs scored: 355");
}

#[test]
fn answers_are_deterministic() {
    let records = career();
    let first = answer("which year brought the most runs", &records);
    for _ in 0..10 {
        assert_eq!(answer("which year brought the most runs", &records), first);
    }
}

#[test]
fn empty_dataset_answers_are_defined() {
    assert_eq!(answer("total runs?", &[]), "Total runs scored: 0");
    assert_eq!(answer("how many centuries", &[]), "Number of centuries: 0");
    assert_eq!(answer("how many fifties", &[]), "Number of fifties: 0");
    assert_eq!(answer("total matches", &[]), "Total matches played: 0");
    assert_eq!(answer("average runs?", &[]), "No innings data loaded.");
    assert_eq!(answer("highest score?", &[]), "No innings data loaded.");
    assert_eq!(
        answer("opponent with most runs", &[]),
        "No innings data loaded."
    );
    assert_eq!(answer("year with most runs", &[]), "No innings data loaded.");
}
