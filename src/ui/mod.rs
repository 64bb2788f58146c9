// src/ui/mod.rs

use crate::app::App;
use ratatui::prelude::*;
use vanguard_urlguard::engine::{color_for, ThreatLevel};

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::input::render_input(frame, app, layout.input);
    widgets::analysis_view::render_analysis_view(frame, app, layout.report);
    widgets::summary::render_summary(frame, app, layout.summary);
    widgets::footer::render_footer(frame, app, layout.footer);
}

/// Terminal colour for a threat level, taken from the engine's colour table.
pub(crate) fn level_color(level: ThreatLevel) -> Color {
    let rgb = color_for(level);
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
