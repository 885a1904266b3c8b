use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph};

use innings_terminal::state::{
    AppState, ChartView, Delta, ProviderCommand, Screen, apply_delta,
};
use innings_terminal::{export, feed, query, stats};

struct App {
    state: AppState,
    should_quit: bool,
    cmd_tx: Option<mpsc::Sender<ProviderCommand>>,
}

impl App {
    fn new(cmd_tx: Option<mpsc::Sender<ProviderCommand>>) -> Self {
        Self {
            state: AppState::new(),
            should_quit: false,
            cmd_tx,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.screen == Screen::Ask {
            self.on_ask_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.screen = Screen::Overview,
            KeyCode::Char('2') => self.state.screen = Screen::Charts,
            KeyCode::Char('3') | KeyCode::Char('a') => self.state.screen = Screen::Ask,
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('c') | KeyCode::Tab => {
                self.state.chart_view = self.state.chart_view.next();
            }
            KeyCode::Char('r') => self.request_reload(),
            KeyCode::Char('e') => self.export_workbook(),
            KeyCode::Char('s') => self.export_snapshot(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn on_ask_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.screen = Screen::Overview,
            KeyCode::Enter => {
                let question = self.state.question.trim().to_string();
                if !question.is_empty() {
                    let reply = query::answer(&question, &self.state.records);
                    self.state.answer = Some(reply);
                }
            }
            KeyCode::Backspace => {
                self.state.question.pop();
            }
            KeyCode::Char(c) => self.state.question.push(c),
            _ => {}
        }
    }

    fn request_reload(&mut self) {
        let Some(tx) = &self.cmd_tx else {
            self.state.push_log("[INFO] Reload unavailable");
            return;
        };
        if tx.send(ProviderCommand::Reload).is_err() {
            self.state.push_log("[WARN] Reload request failed");
        } else {
            self.state.push_log("[INFO] Reload request sent");
        }
    }

    fn export_workbook(&mut self) {
        let path = export_path();
        match export::export_workbook(&path, &self.state.records) {
            Ok(report) => self.state.push_log(format!(
                "[INFO] Exported {} innings across {} sheets to {}",
                report.innings,
                report.sheets,
                path.display()
            )),
            Err(err) => self.state.push_log(format!("[WARN] Export failed: {err:#}")),
        }
    }

    fn export_snapshot(&mut self) {
        let path = export_path().with_extension("json");
        match export::write_summary_json(&path, &self.state.source_label, &self.state.records) {
            Ok(()) => self
                .state
                .push_log(format!("[INFO] Wrote summary snapshot to {}", path.display())),
            Err(err) => self.state.push_log(format!("[WARN] Snapshot failed: {err:#}")),
        }
    }
}

fn export_path() -> PathBuf {
    env::var("INNINGS_EXPORT_PATH")
        .unwrap_or_else(|_| "innings_export.xlsx".to_string())
        .into()
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel();
    let (cmd_tx, cmd_rx) = mpsc::channel();
    feed::spawn_source_provider(tx, cmd_rx);

    let mut app = App::new(Some(cmd_tx));
    let res = run_app(&mut terminal, &mut app, rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<Delta>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        while let Ok(delta) = rx.try_recv() {
            apply_delta(&mut app.state, delta);
        }

        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::Overview => render_overview(frame, chunks[1], &app.state),
        Screen::Charts => render_charts(frame, chunks[1], &app.state),
        Screen::Ask => render_ask(frame, chunks[1], &app.state),
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer =
        Paragraph::new(footer_text(&app.state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let source = if state.source_label.is_empty() {
        "loading...".to_string()
    } else {
        state.source_label.clone()
    };
    let title = match state.screen {
        Screen::Overview => format!("INNINGS TERMINAL | OVERVIEW | {source}"),
        Screen::Charts => format!(
            "INNINGS TERMINAL | CHARTS | {} | {source}",
            state.chart_view.title()
        ),
        Screen::Ask => format!("INNINGS TERMINAL | ASK | {source}"),
    };
    let line1 = format!("  ,-.  {title}");
    let line2 = " (   )".to_string();
    let line3 = "  `-'".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Overview => {
            "1 Overview | 2 Charts | 3/a Ask | j/k/↑/↓ Move | r Reload | e Export | s Snapshot | ? Help | q Quit"
                .to_string()
        }
        Screen::Charts => {
            "1 Overview | 2 Charts | 3/a Ask | c/Tab Next chart | r Reload | ? Help | q Quit"
                .to_string()
        }
        Screen::Ask => "Type your question | Enter Submit | Esc Back".to_string(),
    }
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_overview(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    render_summary_cards(frame, sections[0], state);
    render_table(frame, sections[1], state);
}

fn render_summary_cards(frame: &mut Frame, area: Rect, state: &AppState) {
    let summary = stats::summarize(&state.records);
    let cards = [
        ("Matches", summary.matches.to_string()),
        ("Runs", summary.runs.to_string()),
        ("Average", stats::format_average(summary.average)),
        (
            "Highest",
            summary
                .highest
                .map(|h| h.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        ("Centuries", summary.centuries.to_string()),
        ("Fifties", summary.fifties.to_string()),
    ];

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(area);

    for (i, (label, value)) in cards.iter().enumerate() {
        let card = Paragraph::new(value.clone())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().title(*label).borders(Borders::ALL));
        frame.render_widget(card, cols[i]);
    }
}

fn table_columns() -> [Constraint; 7] {
    [
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Min(14),
        Constraint::Min(14),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(7),
    ]
}

fn render_table(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let widths = table_columns();
    render_table_header(frame, sections[0], &widths);

    let list_area = sections[1];
    if state.records.is_empty() {
        let empty = Paragraph::new("No innings loaded ('r' to reload)")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }
    if list_area.height == 0 {
        return;
    }

    let visible = list_area.height as usize;
    let (start, end) = visible_range(state.selected, state.records.len(), visible);

    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };

        let selected = idx == state.selected;
        let row_style = if selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        if selected {
            frame.render_widget(Block::default().style(row_style), row_area);
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(widths)
            .split(row_area);

        let record = &state.records[idx];
        let date = record
            .date
            .map(|d| d.format("%d %b %Y").to_string())
            .unwrap_or_else(|| "-".to_string());

        render_cell_text(frame, cols[0], &record.match_no.to_string(), row_style);
        render_cell_text(frame, cols[1], &record.runs.to_string(), row_style);
        render_cell_text(frame, cols[2], &record.opponent, row_style);
        render_cell_text(frame, cols[3], &record.ground, row_style);
        render_cell_text(frame, cols[4], &date, row_style);
        render_cell_text(frame, cols[5], &record.match_type, row_style);
        render_cell_text(frame, cols[6], &record.total.to_string(), row_style);
    }
}

fn render_table_header(frame: &mut Frame, area: Rect, widths: &[Constraint]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(area);
    let style = Style::default().add_modifier(Modifier::BOLD);

    render_cell_text(frame, cols[0], "#", style);
    render_cell_text(frame, cols[1], "Runs", style);
    render_cell_text(frame, cols[2], "Opponent", style);
    render_cell_text(frame, cols[3], "Ground", style);
    render_cell_text(frame, cols[4], "Date", style);
    render_cell_text(frame, cols[5], "Type", style);
    render_cell_text(frame, cols[6], "Total", style);
}

fn render_cell_text(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let paragraph = Paragraph::new(text.to_string()).style(style);
    frame.render_widget(paragraph, area);
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn render_charts(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.records.is_empty() {
        let empty = Paragraph::new("No innings loaded ('r' to reload)")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let (bars, bar_width) = chart_bars(state);
    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .block(
            Block::default()
                .title(state.chart_view.title())
                .borders(Borders::ALL),
        );
    frame.render_widget(chart, area);
}

fn chart_bars(state: &AppState) -> (Vec<Bar<'static>>, u16) {
    match state.chart_view {
        ChartView::RunsByDate => {
            // Fresh sorted view per draw; the table's record order is untouched.
            let sorted = stats::sorted_by_date(&state.records);
            let bars = sorted
                .iter()
                .map(|record| {
                    let label = record
                        .date
                        .map(|d| d.format("%b%y").to_string())
                        .unwrap_or_else(|| "--".to_string());
                    value_bar(label, u64::from(record.runs), Color::Blue)
                })
                .collect();
            (bars, 5)
        }
        ChartView::ByOpponent => {
            let mut groups = stats::runs_by_opponent(&state.records);
            groups.sort_by(|a, b| b.1.cmp(&a.1));
            (group_bars(&groups, Color::Green), 10)
        }
        ChartView::ByMatchType => {
            let groups = stats::runs_by_match_type(&state.records);
            (group_bars(&groups, Color::Cyan), 10)
        }
        ChartView::ByYear => {
            let mut groups = stats::runs_by_year(&state.records);
            groups.sort_by(|a, b| a.0.cmp(&b.0));
            (group_bars(&groups, Color::Yellow), 8)
        }
    }
}

fn group_bars(groups: &[(String, u64)], color: Color) -> Vec<Bar<'static>> {
    groups
        .iter()
        .map(|(label, runs)| value_bar(label.clone(), *runs, color))
        .collect()
}

fn value_bar(label: String, value: u64, color: Color) -> Bar<'static> {
    Bar::default()
        .value(value)
        .label(label.into())
        .text_value(value.to_string())
        .style(Style::default().fg(color))
}

fn render_ask(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
        ])
        .split(area);

    let input = Paragraph::new(format!("> {}_", state.question))
        .block(Block::default().title("Question").borders(Borders::ALL));
    frame.render_widget(input, sections[0]);

    let answer_text = state
        .answer
        .clone()
        .unwrap_or_else(|| "Ask about totals, averages, milestones, opponents or years.".to_string());
    let answer = Paragraph::new(answer_text)
        .block(Block::default().title("Answer").borders(Borders::ALL));
    frame.render_widget(answer, sections[1]);

    let hints = [
        "Examples:",
        "  what are my total runs?",
        "  average runs per match",
        "  highest score",
        "  how many centuries / fifties",
        "  total matches played",
        "  which opponent conceded most runs?",
        "  which year had most runs?",
    ]
    .join("\n");
    let hints = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title("Supported questions").borders(Borders::ALL));
    frame.render_widget(hints, sections[2]);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Innings Terminal - Help",
        "",
        "Global:",
        "  1            Overview (summary + table)",
        "  2            Charts",
        "  3 / a        Ask a question",
        "  r            Reload source",
        "  e            Export workbook",
        "  s            Write summary snapshot",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Overview:",
        "  j/k or ↑/↓   Move selection",
        "",
        "Charts:",
        "  c / Tab      Cycle chart view",
        "",
        "Ask:",
        "  Enter        Submit question",
        "  Esc          Back to overview",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
