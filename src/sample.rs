use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;

use crate::record::MatchRecord;

const OPPONENTS: [&str; 8] = [
    "Australia",
    "England",
    "Pakistan",
    "Sri Lanka",
    "South Africa",
    "New Zealand",
    "West Indies",
    "Bangladesh",
];

const GROUNDS: [&str; 6] = [
    "Mumbai", "Delhi", "Adelaide", "Lord's", "Colombo", "Durban",
];

const MATCH_TYPES: [&str; 3] = ["ODI", "Test", "T20"];

const SAMPLE_INNINGS: usize = 60;

/// Synthetic career used when INNINGS_SOURCE=demo: several seasons of
/// plausible scores so every screen has something to draw.
pub fn sample_career() -> Vec<MatchRecord> {
    let mut rng = rand::thread_rng();
    let mut date = NaiveDate::from_ymd_opt(2015, 1, 10).unwrap_or_default();
    let mut records = Vec::with_capacity(SAMPLE_INNINGS);

    for match_no in 1..=SAMPLE_INNINGS as u32 {
        let roll = rng.gen_range(0..100);
        let runs: u32 = if roll < 10 {
            rng.gen_range(100..=183)
        } else if roll < 32 {
            rng.gen_range(50..100)
        } else {
            rng.gen_range(0..50)
        };

        records.push(MatchRecord {
            match_no,
            runs,
            opponent: OPPONENTS[rng.gen_range(0..OPPONENTS.len())].to_string(),
            ground: GROUNDS[rng.gen_range(0..GROUNDS.len())].to_string(),
            match_type: MATCH_TYPES[rng.gen_range(0..MATCH_TYPES.len())].to_string(),
            total: runs + rng.gen_range(120..260),
            date: Some(date),
            year: Some(date.year()),
        });

        date = date + Duration::days(rng.gen_range(5..40));
    }

    records
}
