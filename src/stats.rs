use std::collections::HashMap;

use serde::Serialize;

use crate::record::MatchRecord;

pub const CENTURY: u32 = 100;
pub const FIFTY: u32 = 50;

/// Headline metrics for a record set. `average` and `highest` are `None`
/// for an empty set rather than NaN-style sentinels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingSummary {
    pub matches: usize,
    pub runs: u64,
    pub average: Option<f64>,
    pub highest: Option<u32>,
    pub centuries: usize,
    pub fifties: usize,
}

pub fn summarize(records: &[MatchRecord]) -> BattingSummary {
    BattingSummary {
        matches: total_matches(records),
        runs: total_runs(records),
        average: average_runs(records),
        highest: highest_score(records),
        centuries: centuries(records),
        fifties: fifties(records),
    }
}

pub fn total_matches(records: &[MatchRecord]) -> usize {
    records.len()
}

pub fn total_runs(records: &[MatchRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.runs)).sum()
}

pub fn average_runs(records: &[MatchRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    Some(total_runs(records) as f64 / records.len() as f64)
}

pub fn highest_score(records: &[MatchRecord]) -> Option<u32> {
    records.iter().map(|r| r.runs).max()
}

/// Count of records with `runs` in `[low, high)`; `None` means unbounded.
pub fn count_in_range(records: &[MatchRecord], low: u32, high: Option<u32>) -> usize {
    records
        .iter()
        .filter(|r| r.runs >= low && high.is_none_or(|h| r.runs < h))
        .count()
}

pub fn centuries(records: &[MatchRecord]) -> usize {
    count_in_range(records, CENTURY, None)
}

pub fn fifties(records: &[MatchRecord]) -> usize {
    count_in_range(records, FIFTY, Some(CENTURY))
}

/// Two-decimal display form of an average; `-` when there is none.
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(avg) => format!("{avg:.2}"),
        None => "-".to_string(),
    }
}

/// Grouped run totals in first-encounter order. Records whose key is `None`
/// are excluded from the grouping only; they still count toward ungrouped
/// totals. The returned order is the tie-break order for `top_group`.
pub fn runs_by_key(
    records: &[MatchRecord],
    key_fn: impl Fn(&MatchRecord) -> Option<String>,
) -> Vec<(String, u64)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, u64)> = Vec::new();
    for record in records {
        let Some(key) = key_fn(record) else { continue };
        match index.get(&key) {
            Some(&slot) => groups[slot].1 += u64::from(record.runs),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, u64::from(record.runs)));
            }
        }
    }
    groups
}

pub fn runs_by_opponent(records: &[MatchRecord]) -> Vec<(String, u64)> {
    runs_by_key(records, |r| Some(r.opponent.clone()))
}

pub fn runs_by_match_type(records: &[MatchRecord]) -> Vec<(String, u64)> {
    runs_by_key(records, |r| Some(r.match_type.clone()))
}

pub fn runs_by_year(records: &[MatchRecord]) -> Vec<(String, u64)> {
    runs_by_key(records, |r| r.year.map(|y| y.to_string()))
}

/// The group with the maximum summed runs; the first-encountered group wins
/// ties.
pub fn top_group(groups: &[(String, u64)]) -> Option<&(String, u64)> {
    let mut best: Option<&(String, u64)> = None;
    for group in groups {
        if best.is_none_or(|b| group.1 > b.1) {
            best = Some(group);
        }
    }
    best
}

/// Chronological view of the records: a fresh clone, stable-sorted by date
/// ascending. Undated records keep their source order after every dated one.
/// The input slice is never reordered.
pub fn sorted_by_date(records: &[MatchRecord]) -> Vec<MatchRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| (r.date.is_none(), r.date));
    sorted
}
