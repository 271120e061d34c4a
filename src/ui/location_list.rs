//! Location list screen rendering
//!
//! Renders the main list view showing all locations with a quick summary of
//! their synthesized conditions: safety verdict, air pollution level, water
//! quality score, and deforestation risk.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::profile::{LocationProfile, SafetyLevel};

/// Safety level to icon mapping
fn safety_icon(level: &SafetyLevel) -> &'static str {
    match level {
        SafetyLevel::Safe => "\u{1F7E2}",     // 🟢
        SafetyLevel::Moderate => "\u{1F7E1}", // 🟡
        SafetyLevel::Unsafe => "\u{1F534}",   // 🔴
    }
}

/// Color for a safety level badge
pub fn safety_color(level: &SafetyLevel) -> Color {
    match level {
        SafetyLevel::Safe => Color::Green,
        SafetyLevel::Moderate => Color::Yellow,
        SafetyLevel::Unsafe => Color::Red,
    }
}

/// Color for an air pollution level (higher = worse)
pub fn air_level_color(level: u8) -> Color {
    if level >= 70 {
        Color::Red
    } else if level >= 55 {
        Color::LightRed
    } else if level >= 45 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Color for a water quality score (higher = better)
pub fn water_score_color(score: u8) -> Color {
    if score > 80 {
        Color::Green
    } else if score > 60 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Renders the location list view
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // List
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    // Header with title and generation timestamp
    let generated = app
        .generated_at
        .map(|t| format!("generated {}", t.format("%H:%M:%S")))
        .unwrap_or_default();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Envsafe ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("— environmental safety profiles  "),
        Span::styled(generated, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    // One row per location
    let mut lines = Vec::with_capacity(app.locations.len());
    for (i, location) in app.locations.iter().enumerate() {
        let selected = i == app.selected_index;
        let profile = app.get_profile(&location.id);
        lines.push(location_row(&location.name, profile, selected));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No locations to show",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Locations "),
    );
    frame.render_widget(list, chunks[1]);

    // Footer with key hints
    let footer = Paragraph::new(Line::from(Span::styled(
        " ↑/↓ navigate  Enter details  ? help  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, chunks[2]);
}

/// Builds a single list row with summary metrics
fn location_row(name: &str, profile: Option<&LocationProfile>, selected: bool) -> Line<'static> {
    let cursor = if selected { "▶ " } else { "  " };
    let name_style = if selected {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(cursor.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<28}", truncate(name, 27)), name_style),
    ];

    match profile {
        Some(p) => {
            spans.push(Span::raw(format!("{} ", safety_icon(&p.safety_level))));
            spans.push(Span::styled(
                format!("{:<9}", p.safety_level.label()),
                Style::default().fg(safety_color(&p.safety_level)),
            ));
            spans.push(Span::raw("  air "));
            spans.push(Span::styled(
                format!("{:>2}", p.air_pollution.level),
                Style::default().fg(air_level_color(p.air_pollution.level)),
            ));
            spans.push(Span::raw("  water "));
            spans.push(Span::styled(
                format!("{:>2}", p.water_quality.score),
                Style::default().fg(water_score_color(p.water_quality.score)),
            ));
            spans.push(Span::raw("  forest risk "));
            spans.push(Span::raw(format!("{:>2}", p.deforestation.risk)));
        }
        None => {
            spans.push(Span::styled(
                "no data".to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    Line::from(spans)
}

/// Truncates a display name with an ellipsis
fn truncate(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
