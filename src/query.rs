use crate::record::MatchRecord;
use crate::stats;

/// One recognized category of question, mapped to a specific statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TotalRuns,
    AverageRuns,
    HighestScore,
    Centuries,
    Fifties,
    TotalMatches,
    TopOpponent,
    TopYear,
}

pub const HELP_TEXT: &str = "Sorry, I can answer questions about total runs, average runs, highest score, centuries, fifties, total matches, most runs against an opponent, or most runs in a year. Please rephrase your question.";

const NO_DATA_TEXT: &str = "No innings data loaded.";

/// Intent predicates in priority order; the first hit wins. Several
/// predicates overlap (a "total matches" question also contains "total"),
/// so the order is part of the contract.
const INTENTS: [(Intent, fn(&str) -> bool); 8] = [
    (Intent::TotalRuns, |q| {
        q.contains("total runs") || q.contains("sum of runs")
    }),
    (Intent::AverageRuns, |q| {
        q.contains("average runs") || q.contains("mean runs")
    }),
    (Intent::HighestScore, |q| {
        q.contains("highest score") || q.contains("maximum runs")
    }),
    (Intent::Centuries, |q| q.contains("centuries")),
    (Intent::Fifties, |q| q.contains("fifties")),
    (Intent::TotalMatches, |q| {
        q.contains("matches") && q.contains("total")
    }),
    (Intent::TopOpponent, |q| {
        q.contains("opponent") && q.contains("most runs")
    }),
    (Intent::TopYear, |q| {
        q.contains("year") && q.contains("most runs")
    }),
];

/// Match a question against the intent table. Case-insensitive; `None` when
/// no predicate fires.
pub fn classify(question: &str) -> Option<Intent> {
    let q = question.to_lowercase();
    INTENTS
        .iter()
        .find(|(_, predicate)| predicate(&q))
        .map(|(intent, _)| *intent)
}

/// Answer a free-text question from the current record set. Every branch
/// computes its statistic fresh; an unmatched question yields the help text,
/// never an error.
pub fn answer(question: &str, records: &[MatchRecord]) -> String {
    let Some(intent) = classify(question) else {
        return HELP_TEXT.to_string();
    };

    match intent {
        Intent::TotalRuns => format!("Total runs scored: {}", stats::total_runs(records)),
        Intent::AverageRuns => match stats::average_runs(records) {
            Some(avg) => format!("Average runs per match: {avg:.2}"),
            None => NO_DATA_TEXT.to_string(),
        },
        Intent::HighestScore => match stats::highest_score(records) {
            Some(max) => format!("Highest score: {max}"),
            None => NO_DATA_TEXT.to_string(),
        },
        Intent::Centuries => format!("Number of centuries: {}", stats::centuries(records)),
        Intent::Fifties => format!("Number of fifties: {}", stats::fifties(records)),
        Intent::TotalMatches => format!("Total matches played: {}", stats::total_matches(records)),
        Intent::TopOpponent => {
            let groups = stats::runs_by_opponent(records);
            match stats::top_group(&groups) {
                Some((opponent, runs)) => format!("Most runs against {opponent}: {runs}"),
                None => NO_DATA_TEXT.to_string(),
            }
        }
        Intent::TopYear => {
            let groups = stats::runs_by_year(records);
            match stats::top_group(&groups) {
                Some((year, runs)) => format!("Most runs in {year}: {runs}"),
                None => NO_DATA_TEXT.to_string(),
            }
        }
    }
}
