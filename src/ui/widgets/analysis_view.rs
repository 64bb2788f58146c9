// src/ui/widgets/analysis_view.rs

use crate::app::{App, AppState};
use crate::ui::level_color;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use vanguard_urlguard::engine::{label_for, ScanResult};

pub fn render_analysis_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Analysis Report (Navigate with ↑ ↓)");

    let result = match (&app.state, app.current()) {
        (AppState::Finished, Some(result)) => result.clone(),
        _ => {
            let content = Paragraph::new("Scan results will appear here...")
                .alignment(Alignment::Center)
                .block(main_block);
            frame.render_widget(content, area);
            return;
        }
    };

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(35),
            Constraint::Min(0),
        ])
        .split(inner_area);

    render_verdict(frame, &result, chunks[0]);

    if result.findings.is_empty() {
        render_all_clear(frame, chunks[1].union(chunks[2]));
        return;
    }

    let category_style = Style::default().fg(Color::DarkGray);
    let items: Vec<ListItem> = result
        .findings
        .iter()
        .map(|finding| {
            let detail = finding.detail();
            let title_style = Style::default().fg(level_color(detail.escalates_to));
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", detail.category), category_style),
                Span::styled(detail.message, title_style),
            ]))
        })
        .collect();

    let findings_list = List::new(items)
        .block(Block::default().borders(Borders::TOP).title("Threats"))
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(findings_list, chunks[1], &mut app.analysis_list_state);

    let detail_block = Block::default().borders(Borders::TOP).title("Details");
    let selected = app
        .analysis_list_state
        .selected()
        .and_then(|i| result.findings.get(i));
    if let Some(finding) = selected {
        let detail = finding.detail();
        let text = vec![
            Line::from(""),
            Line::from("WHAT IT MEANS:".yellow().bold()),
            Line::from(detail.description),
            Line::from(""),
            Line::from("WHAT TO DO:".yellow().bold()),
            Line::from(detail.remediation),
        ];
        let p = Paragraph::new(text).wrap(Wrap { trim: true }).block(detail_block);
        frame.render_widget(p, chunks[2]);
    } else {
        let p = Paragraph::new("Select an item above to see details.")
            .alignment(Alignment::Center)
            .block(detail_block);
        frame.render_widget(p, chunks[2]);
    }
}

fn render_verdict(frame: &mut Frame, result: &ScanResult, area: Rect) {
    let level_style = Style::default().fg(level_color(result.threat_level)).bold();
    let text = vec![
        Line::from(vec![Span::raw("URL: "), Span::styled(result.url.as_str(), Style::default().fg(Color::Cyan))]),
        Line::from(vec![Span::raw("Threat level: "), Span::styled(label_for(result.threat_level), level_style)]),
        Line::from(result.recommendation.as_str()),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), area);
}

fn render_all_clear(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(""),
        Line::from("✓ NO THREATS DETECTED".bold().fg(Color::Green)),
        Line::from(""),
        Line::from("None of the phishing, keyword, shortener or host checks matched this URL."),
    ]);
    let p = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(p, area);
}
