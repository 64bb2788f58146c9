// src/ui/widgets/summary.rs

use crate::app::App;
use crate::ui::level_color;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};
use vanguard_urlguard::engine::label_for;

/// Renders the session overview: posture score, counters and recent scans.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Summary");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Score & level
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Session counters
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Recent scans
        ])
        .split(area);

    // --- Score & Level ---
    let level = app.summary.level;
    let level_style = Style::default().fg(level_color(level));
    let score_line =
        Line::from(format!("{}/100 ({})", app.summary.score, label_for(level))).style(level_style);
    let score_text = Text::from(vec![Line::from("Security Score".bold()), score_line]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), summary_chunks[0]);

    let score_gauge = Gauge::default()
        .percent(u16::from(app.summary.score))
        .label("")
        .style(level_style);
    frame.render_widget(score_gauge, summary_chunks[1]);

    // --- Session Counters ---
    let stats_block = Block::default().title("SESSION".bold());
    let stats = app.stats;
    let stats_text = Text::from(vec![
        Line::from(format!("URLs scanned: {}", stats.urls_scanned)),
        Line::from(vec![
            Span::raw("Active threats: "),
            Span::styled(stats.active_threats.to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::raw("Threats blocked: "),
            Span::styled(stats.threats_blocked.to_string(), Style::default().fg(Color::Green)),
        ]),
    ]);
    frame.render_widget(Paragraph::new(stats_text).block(stats_block), summary_chunks[3]);

    // --- Recent Scans ---
    let history_block = Block::default().title("RECENT SCANS".bold());
    let history_lines: Vec<Line> = if app.history.is_empty() {
        vec![Line::from("Nothing scanned yet.")]
    } else {
        app.history
            .iter()
            .map(|entry| {
                let level = entry.result.threat_level;
                Line::from(vec![
                    Span::styled(
                        entry.scanned_at.format("%H:%M:%S ").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{:<11} ", label_for(level)), Style::default().fg(level_color(level))),
                    Span::raw(entry.result.url.as_str()),
                ])
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(history_lines).block(history_block), summary_chunks[5]);
}
