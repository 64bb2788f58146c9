// src/main.rs

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{eyre, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{stdout, Write};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

use vanguard_urlguard::engine::{classify, knowledge_base, label_for, rules::RULES_VERSION, ScanResult};
use vanguard_urlguard::logging;

mod app;
mod ui;

use app::{App, AppState};

/// Exit code when at least one scanned URL is unsafe.
const EXIT_UNSAFE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Classify URLs for phishing, malware and spoofing indicators.
///
/// With no URLs, starts the interactive scanner.
#[derive(Debug, Parser)]
#[command(name = "vanguard-urlguard", version, about)]
struct Cli {
    /// URLs to classify once and exit.
    urls: Vec<String>,

    /// Output format for one-shot scans.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the explanation for a finding code (e.g. URL_PHISHING_PATTERN) and exit.
    #[arg(long, value_name = "CODE", conflicts_with = "urls")]
    explain: Option<String>,

    /// Do not write a log file.
    #[arg(long)]
    no_log: bool,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if !cli.no_log {
        logging::initialize_logging()?;
    }
    info!(rules_version = RULES_VERSION, "Starting vanguard-urlguard.");

    if let Some(code) = &cli.explain {
        explain(code)?;
        return Ok(ExitCode::SUCCESS);
    }

    if !cli.urls.is_empty() {
        return scan_once(&cli.urls, cli.format);
    }

    run_tui()?;
    Ok(ExitCode::SUCCESS)
}

fn explain(code: &str) -> Result<()> {
    let detail = knowledge_base::get_finding_detail(code).ok_or_else(|| {
        let known: Vec<&str> = knowledge_base::all_findings().iter().map(|f| f.code).collect();
        eyre!("unknown finding code '{code}'; known codes: {}", known.join(", "))
    })?;
    let mut out = stdout().lock();
    writeln!(out, "{} ({})", detail.code, detail.category)?;
    writeln!(out, "Reason:      {}", detail.message)?;
    writeln!(out, "Escalates:   {}", label_for(detail.escalates_to))?;
    writeln!(out, "Marks unsafe: {}", detail.marks_unsafe)?;
    writeln!(out)?;
    writeln!(out, "{}", detail.description)?;
    writeln!(out)?;
    writeln!(out, "{}", detail.remediation)?;
    Ok(())
}

fn scan_once(urls: &[String], format: OutputFormat) -> Result<ExitCode> {
    let mut out = stdout().lock();
    let mut any_unsafe = false;
    for url in urls {
        let result = classify(url);
        any_unsafe |= !result.is_safe;
        match format {
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&result)?)?,
            OutputFormat::Text => write_text(&mut out, &result)?,
        }
    }
    Ok(if any_unsafe { ExitCode::from(EXIT_UNSAFE) } else { ExitCode::SUCCESS })
}

fn write_text(out: &mut impl Write, result: &ScanResult) -> Result<()> {
    let verdict = if result.is_safe { "SAFE" } else { "UNSAFE" };
    writeln!(out, "{}", result.url)?;
    writeln!(out, "  {verdict} - {}", label_for(result.threat_level))?;
    for threat in &result.threats {
        writeln!(out, "  * {threat}")?;
    }
    writeln!(out, "  {}", result.recommendation)?;
    Ok(())
}

fn run_tui() -> Result<()> {
    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new();
    let outcome = event_loop(&mut terminal, &mut app);
    if let Err(e) = &outcome {
        error!(error = %e, "Interactive session failed.");
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    outcome
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(app)?;
        }
    }
    Ok(())
}

fn handle_events(app: &mut App) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match app.state {
                AppState::Idle => handle_idle_input(app, key.code),
                AppState::Finished => handle_finished_input(app, key.code),
            }
        }
    }
    Ok(())
}

/// Input while the user is typing a URL.
fn handle_idle_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') if app.input.is_empty() => app.quit(),
        KeyCode::Esc if app.input.is_empty() => app.quit(),
        KeyCode::Esc => app.input.clear(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => app.submit(),
        _ => {}
    }
}

/// Input while a report is displayed.
fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') | KeyCode::Esc => app.new_scan(),
        KeyCode::Char('b') => app.block_active_threats(),
        KeyCode::Char('r') => app.reset_stats(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        _ => {}
    }
}
