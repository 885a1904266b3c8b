use std::collections::VecDeque;

use crate::record::MatchRecord;

const MAX_LOG_LINES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Overview,
    Charts,
    Ask,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartView {
    RunsByDate,
    ByOpponent,
    ByMatchType,
    ByYear,
}

impl ChartView {
    pub fn next(self) -> Self {
        match self {
            ChartView::RunsByDate => ChartView::ByOpponent,
            ChartView::ByOpponent => ChartView::ByMatchType,
            ChartView::ByMatchType => ChartView::ByYear,
            ChartView::ByYear => ChartView::RunsByDate,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartView::RunsByDate => "Runs Scored Over Time",
            ChartView::ByOpponent => "Total Runs by Opponent",
            ChartView::ByMatchType => "Runs Distribution by Match Type",
            ChartView::ByYear => "Total Runs by Year",
        }
    }
}

/// All mutable dashboard state. The record sequence is only ever replaced
/// wholesale through `apply_delta`; nothing mutates it in place.
pub struct AppState {
    pub records: Vec<MatchRecord>,
    pub source_label: String,
    pub loaded: bool,
    pub screen: Screen,
    pub chart_view: ChartView,
    pub selected: usize,
    pub question: String,
    pub answer: Option<String>,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            source_label: String::new(),
            loaded: false,
            screen: Screen::Overview,
            chart_view: ChartView::RunsByDate,
            selected: 0,
            question: String::new(),
            answer: None,
            logs: VecDeque::new(),
            help_overlay: false,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOG_LINES {
            self.logs.pop_front();
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.records.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_record(&self) -> Option<&MatchRecord> {
        self.records.get(self.selected)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum Delta {
    SetRecords {
        source: String,
        records: Vec<MatchRecord>,
    },
    Log(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderCommand {
    Reload,
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetRecords { source, records } => {
            state.push_log(format!(
                "[INFO] Loaded {} innings from {source}",
                records.len()
            ));
            state.records = records;
            state.source_label = source;
            state.loaded = true;
            state.selected = state.selected.min(state.records.len().saturating_sub(1));
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}
