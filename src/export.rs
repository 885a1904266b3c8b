use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use serde::Serialize;

use crate::record::MatchRecord;
use crate::stats::{self, BattingSummary, format_average};

pub struct ExportReport {
    pub innings: usize,
    pub sheets: usize,
}

/// Write the full dashboard content to an xlsx workbook: the innings table,
/// the headline summary, and the three grouped breakdowns.
pub fn export_workbook(path: &Path, records: &[MatchRecord]) -> Result<ExportReport> {
    let mut workbook = Workbook::new();

    let summary = stats::summarize(records);
    let mut innings_rows = vec![vec![
        "Match No".to_string(),
        "Runs".to_string(),
        "Opponent".to_string(),
        "Ground".to_string(),
        "Date".to_string(),
        "Match Type".to_string(),
        "Team Total".to_string(),
    ]];
    for record in records {
        innings_rows.push(vec![
            record.match_no.to_string(),
            record.runs.to_string(),
            record.opponent.clone(),
            record.ground.clone(),
            record
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            record.match_type.clone(),
            record.total.to_string(),
        ]);
    }

    let summary_rows = vec![
        vec!["Metric".to_string(), "Value".to_string()],
        vec!["Total Matches".to_string(), summary.matches.to_string()],
        vec!["Total Runs".to_string(), summary.runs.to_string()],
        vec!["Average Runs".to_string(), format_average(summary.average)],
        vec![
            "Highest Score".to_string(),
            summary
                .highest
                .map(|h| h.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ],
        vec!["Centuries".to_string(), summary.centuries.to_string()],
        vec!["Fifties".to_string(), summary.fifties.to_string()],
    ];

    let sheets = [
        ("Innings", innings_rows),
        ("Summary", summary_rows),
        ("By Opponent", group_rows("Opponent", &stats::runs_by_opponent(records))),
        ("By Match Type", group_rows("Match Type", &stats::runs_by_match_type(records))),
        ("By Year", group_rows("Year", &stats::runs_by_year(records))),
    ];

    let sheet_count = sheets.len();
    for (name, rows) in &sheets {
        write_sheet(&mut workbook, name, rows)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("save workbook {}", path.display()))?;

    Ok(ExportReport {
        innings: records.len(),
        sheets: sheet_count,
    })
}

fn group_rows(key_label: &str, groups: &[(String, u64)]) -> Vec<Vec<String>> {
    let mut rows = vec![vec![key_label.to_string(), "Runs".to_string()]];
    for (key, runs) in groups {
        rows.push(vec![key.clone(), runs.to_string()]);
    }
    rows
}

fn write_sheet(workbook: &mut Workbook, name: &str, rows: &[Vec<String>]) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet
        .set_name(name)
        .with_context(|| format!("name worksheet {name}"))?;
    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            sheet
                .write_string(row as u32, col as u16, value.as_str())
                .with_context(|| format!("write {name}!{row}:{col}"))?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct SummarySnapshot<'a> {
    source: &'a str,
    summary: BattingSummary,
    runs_by_opponent: Vec<(String, u64)>,
    runs_by_match_type: Vec<(String, u64)>,
    runs_by_year: Vec<(String, u64)>,
}

/// Write the summary and groupings as pretty-printed JSON.
pub fn write_summary_json(path: &Path, source: &str, records: &[MatchRecord]) -> Result<()> {
    let snapshot = SummarySnapshot {
        source,
        summary: stats::summarize(records),
        runs_by_opponent: stats::runs_by_opponent(records),
        runs_by_match_type: stats::runs_by_match_type(records),
        runs_by_year: stats::runs_by_year(records),
    };
    let json = serde_json::to_string_pretty(&snapshot).context("serialize summary snapshot")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
