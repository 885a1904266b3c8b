use chrono::{Datelike, NaiveDate};

/// One parsed innings row from the source CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub match_no: u32,
    pub runs: u32,
    pub opponent: String,
    pub ground: String,
    pub match_type: String,
    pub total: u32,
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
}

struct Columns {
    match_no: Option<usize>,
    runs: Option<usize>,
    opponent: Option<usize>,
    ground: Option<usize>,
    date: Option<usize>,
    match_type: Option<usize>,
    total: Option<usize>,
}

impl Columns {
    fn from_header(header: &str) -> Self {
        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        let col = |name: &str| names.iter().position(|n| *n == name);
        Self {
            match_no: col("Match_No"),
            runs: col("runs"),
            opponent: col("opponent"),
            ground: col("ground"),
            date: col("date"),
            match_type: col("match"),
            total: col("total"),
        }
    }
}

/// Parse raw CSV text into innings records.
///
/// The first non-empty line is the header; data rows are split on commas
/// positionally against it. Blank lines produce no record, rows shorter than
/// the header read missing fields as empty, and bad numeric or date fields
/// coerce to 0 / `None`. Parsing never fails as a whole: input without a
/// header yields an empty vector.
///
/// Quoting is not supported; a comma inside a field value lands in the next
/// column.
pub fn parse_batting_csv(raw: &str) -> Vec<MatchRecord> {
    let mut lines = raw.lines();
    let header = loop {
        match lines.next() {
            Some(line) if !line.trim().is_empty() => break line,
            Some(_) => continue,
            None => return Vec::new(),
        }
    };
    let columns = Columns::from_header(header);

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        records.push(record_from_row(&columns, &values));
    }
    records
}

fn record_from_row(columns: &Columns, values: &[&str]) -> MatchRecord {
    let field = |idx: Option<usize>| idx.and_then(|i| values.get(i)).copied().unwrap_or("");

    let date = parse_innings_date(field(columns.date));
    MatchRecord {
        match_no: parse_u32_or_zero(field(columns.match_no)),
        runs: parse_u32_or_zero(field(columns.runs)),
        opponent: field(columns.opponent).to_string(),
        ground: field(columns.ground).to_string(),
        match_type: field(columns.match_type).to_string(),
        total: parse_u32_or_zero(field(columns.total)),
        year: date.map(|d| d.year()),
        date,
    }
}

fn parse_u32_or_zero(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// Parse an innings date. The source data uses compact `18Aug2008` stamps;
/// common ISO and slash forms are accepted as well.
pub fn parse_innings_date(raw: &str) -> Option<NaiveDate> {
    const FORMATS: [&str; 5] = ["%d%b%Y", "%d %b %Y", "%Y-%m-%d", "%d/%m/%Y", "%d-%b-%Y"];

    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    for fmt in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(cleaned, fmt) {
            return Some(date);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{parse_batting_csv, parse_innings_date, parse_u32_or_zero};
    use chrono::NaiveDate;

    #[test]
    fn parse_u32_or_zero_coerces() {
        assert_eq!(parse_u32_or_zero("42"), 42);
        assert_eq!(parse_u32_or_zero(" 7 "), 7);
        assert_eq!(parse_u32_or_zero("abc"), 0);
        assert_eq!(parse_u32_or_zero(""), 0);
        assert_eq!(parse_u32_or_zero("-3"), 0);
    }

    #[test]
    fn parse_innings_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2008, 8, 18);
        assert_eq!(parse_innings_date("18Aug2008"), expected);
        assert_eq!(parse_innings_date("18 Aug 2008"), expected);
        assert_eq!(parse_innings_date("2008-08-18"), expected);
        assert_eq!(parse_innings_date("18/08/2008"), expected);
        assert_eq!(parse_innings_date("18-Aug-2008"), expected);
        assert_eq!(parse_innings_date("not a date"), None);
        assert_eq!(parse_innings_date(""), None);
    }

    #[test]
    fn year_tracks_date() {
        let records = parse_batting_csv(
            "Match_No,runs,opponent,ground,date,match,total\n1,50,A,G,18Aug2008,ODI,200\n2,10,B,G,bad,T20,150\n",
        );
        assert_eq!(records[0].year, Some(2008));
        assert!(records[0].date.is_some());
        assert_eq!(records[1].year, None);
        assert_eq!(records[1].date, None);
    }

    #[test]
    fn leading_blank_lines_before_header() {
        let records = parse_batting_csv("\n\nMatch_No,runs,opponent,ground,date,match,total\n1,9,A,G,,ODI,90\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].runs, 9);
    }
}
