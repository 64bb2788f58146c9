// src/app.rs

use chrono::{DateTime, Local};
use ratatui::widgets::ListState;
use tracing::info;

use vanguard_urlguard::engine::{classify, level_for_score, security_score, ScanResult, ThreatLevel};

/// Keep the on-screen history short; it is never persisted.
const HISTORY_LIMIT: usize = 50;

pub enum AppState {
    Idle,
    Finished,
}

/// Counters for the current session. The engine is stateless; these live here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub urls_scanned: u64,
    pub threats_blocked: u64,
    pub active_threats: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub score: u8,
    pub level: ThreatLevel,
}

impl Default for ScanSummary {
    fn default() -> Self {
        Self { score: 100, level: ThreatLevel::Safe }
    }
}

pub struct HistoryEntry {
    pub result: ScanResult,
    pub scanned_at: DateTime<Local>,
}

pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input: String,
    /// Most recent scan first.
    pub history: Vec<HistoryEntry>,
    pub stats: SessionStats,
    pub summary: ScanSummary,
    pub analysis_list_state: ListState,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input: String::new(),
            history: Vec::new(),
            stats: SessionStats::default(),
            summary: ScanSummary::default(),
            analysis_list_state: ListState::default(),
        }
    }

    pub fn current(&self) -> Option<&ScanResult> {
        self.history.first().map(|entry| &entry.result)
    }

    /// Classifies the typed input exactly as entered.
    pub fn submit(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let result = classify(&self.input);

        self.stats.urls_scanned += 1;
        if !result.is_safe {
            self.stats.active_threats += 1;
        }

        self.history.insert(0, HistoryEntry { result, scanned_at: Local::now() });
        self.history.truncate(HISTORY_LIMIT);

        self.analysis_list_state = ListState::default().with_selected(Some(0));
        self.state = AppState::Finished;
        self.update_summary();
    }

    /// Moves every active threat to the blocked counter.
    pub fn block_active_threats(&mut self) {
        if self.stats.active_threats == 0 {
            return;
        }
        info!(count = self.stats.active_threats, "Blocking active threats.");
        self.stats.threats_blocked += self.stats.active_threats;
        self.stats.active_threats = 0;
        self.update_summary();
    }

    pub fn reset_stats(&mut self) {
        self.stats = SessionStats::default();
        self.update_summary();
    }

    pub fn update_summary(&mut self) {
        let score = security_score(
            i64::try_from(self.stats.threats_blocked).unwrap_or(i64::MAX),
            i64::try_from(self.stats.active_threats).unwrap_or(i64::MAX),
        );
        self.summary = ScanSummary { score, level: level_for_score(i64::from(score)) };
    }

    pub fn select_previous(&mut self) {
        self.analysis_list_state.select_previous();
    }

    pub fn select_next(&mut self) {
        let count = self.current().map_or(0, |r| r.threats.len());
        let next = self
            .analysis_list_state
            .selected()
            .map_or(0, |i| (i + 1).min(count.saturating_sub(1)));
        self.analysis_list_state.select(Some(next));
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Clears the input for another scan. History and counters are kept.
    pub fn new_scan(&mut self) {
        self.state = AppState::Idle;
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(app: &mut App, url: &str) {
        app.input = url.to_string();
        app.submit();
        app.new_scan();
    }

    #[test]
    fn empty_input_is_not_scanned() {
        let mut app = App::new();
        app.input = "   ".to_string();
        app.submit();
        assert_eq!(app.stats.urls_scanned, 0);
        assert!(app.history.is_empty());
    }

    #[test]
    fn unsafe_results_become_active_threats() {
        let mut app = App::new();
        scan(&mut app, "https://example.com");
        scan(&mut app, "http://example.com");
        scan(&mut app, "not a url");
        assert_eq!(app.stats.urls_scanned, 3);
        assert_eq!(app.stats.active_threats, 2);
        assert_eq!(app.summary.score, 70);
        assert_eq!(app.summary.level, ThreatLevel::Low);
        assert_eq!(app.current().unwrap().url, "not a url");
    }

    #[test]
    fn blocking_restores_score() {
        let mut app = App::new();
        scan(&mut app, "http://example.com");
        app.block_active_threats();
        assert_eq!(app.stats.threats_blocked, 1);
        assert_eq!(app.stats.active_threats, 0);
        assert_eq!(app.summary.score, 100);
    }

    #[test]
    fn reset_clears_counters_but_keeps_history() {
        let mut app = App::new();
        scan(&mut app, "http://example.com");
        app.reset_stats();
        assert_eq!(app.stats, SessionStats::default());
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn selection_stays_within_threats() {
        let mut app = App::new();
        app.input = "http://192.168.1.1/".to_string();
        app.submit();
        let threats = app.current().unwrap().threats.len();
        for _ in 0..10 {
            app.select_next();
        }
        assert_eq!(app.analysis_list_state.selected(), Some(threats - 1));
    }
}
