//! Profile detail screen rendering
//!
//! Renders the full synthesized profile for one location: verdict badge,
//! metric sections, and a chart of the historical and predicted series.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::profile::LocationProfile;
use crate::ui::location_list::{air_level_color, safety_color, water_score_color};
use crate::ui::widgets::SeriesSparkline;

/// Width reserved for series labels left of the chart
const CHART_LABEL_WIDTH: u16 = 8;

/// Renders the profile detail view for a location ID
pub fn render(frame: &mut Frame, app: &App, location_id: &str) {
    let Some(profile) = app.get_profile(location_id) else {
        render_missing(frame, location_id);
        return;
    };

    let chart_height = if app.chart_expanded { 6 } else { 4 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),            // Header with verdict
            Constraint::Min(5),               // Metric sections
            Constraint::Length(chart_height), // Series chart
            Constraint::Length(1),            // Footer
        ])
        .split(frame.area());

    render_header(frame, profile, chunks[0]);
    render_sections(frame, app, profile, chunks[1]);
    render_chart(frame, app, profile, chunks[2]);

    let footer = Paragraph::new(Line::from(Span::styled(
        " j/k scroll  g/G top/bottom  c toggle chart  Esc back  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, chunks[3]);
}

/// Renders a placeholder when no profile exists for the ID
fn render_missing(frame: &mut Frame, location_id: &str) {
    let message = Paragraph::new(format!("No profile available for '{}'", location_id))
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, frame.area());
}

/// Header: name, coordinates, and the verdict badge
fn render_header(frame: &mut Frame, profile: &LocationProfile, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                profile.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "  ({:.4}, {:.4})",
                    profile.coordinates.lat, profile.coordinates.lng
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {} ", profile.safety_level.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(safety_color(&profile.safety_level))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  confidence {}%", profile.confidence)),
        ]),
    ];

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Scrollable metric sections
fn render_sections(frame: &mut Frame, app: &App, profile: &LocationProfile, area: Rect) {
    let mut lines = Vec::new();

    lines.push(section_title("Air Pollution"));
    lines.push(Line::from(vec![
        Span::raw("  level "),
        Span::styled(
            profile.air_pollution.level.to_string(),
            Style::default().fg(air_level_color(profile.air_pollution.level)),
        ),
        Span::raw(format!("   {}", profile.air_pollution.trend.label())),
    ]));
    lines.push(Line::from(format!(
        "  sources: {}",
        profile.air_pollution.sources.join(", ")
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Water Quality"));
    lines.push(Line::from(vec![
        Span::raw("  score "),
        Span::styled(
            profile.water_quality.score.to_string(),
            Style::default().fg(water_score_color(profile.water_quality.score)),
        ),
        Span::raw(format!("   status: {:?}", profile.water_quality.status)),
    ]));
    lines.push(Line::from(format!(
        "  contaminants: {}",
        profile.water_quality.contaminants.join(", ")
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Deforestation"));
    lines.push(Line::from(format!(
        "  risk {}   {}",
        profile.deforestation.risk,
        profile.deforestation.trend.label()
    )));
    lines.push(Line::from(format!(
        "  affected area: {}",
        profile.deforestation.affected_area
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Gas Plumes"));
    if profile.gas_plumes.detected {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("detected", Style::default().fg(Color::Red)),
            Span::raw(format!(
                "   intensity {}   likely source: {}",
                profile.gas_plumes.intensity, profile.gas_plumes.source
            )),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("none detected", Style::default().fg(Color::Green)),
        ]));
    }

    let sections = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Metrics "))
        .scroll((app.detail_scroll_offset, 0));
    frame.render_widget(sections, area);
}

/// Series chart: 12 history months plus 6 prediction months
fn render_chart(frame: &mut Frame, app: &App, profile: &LocationProfile, area: Rect) {
    let title = if app.chart_expanded {
        " Trends: 12mo history + 6mo forecast (c to collapse) "
    } else {
        " Air trend: 12mo history + 6mo forecast (c to expand) "
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let air: Vec<f64> = profile
        .historical_data
        .iter()
        .map(|p| p.air_quality)
        .chain(profile.predictions.iter().map(|p| p.air_quality))
        .collect();
    let marker = profile.historical_data.len().saturating_sub(1);

    render_series_row(frame, inner, 0, "air", &air, marker);

    if app.chart_expanded {
        let water: Vec<f64> = profile
            .historical_data
            .iter()
            .map(|p| p.water_quality)
            .chain(profile.predictions.iter().map(|p| p.water_quality))
            .collect();
        render_series_row(frame, inner, 1, "water", &water, marker);

        if inner.height > 2 {
            let risks: Vec<String> = profile
                .predictions
                .iter()
                .map(|p| p.risk.to_string())
                .collect();
            let risk_line = Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", "risk", width = CHART_LABEL_WIDTH as usize),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("forecast {}", risks.join(" → ")),
                    Style::default().fg(Color::Magenta),
                ),
            ]));
            frame.render_widget(
                risk_line,
                Rect::new(inner.x, inner.y + 2, inner.width, 1),
            );
        }
    }
}

/// Renders one labeled sparkline row inside the chart block
fn render_series_row(
    frame: &mut Frame,
    inner: Rect,
    row: u16,
    label: &str,
    values: &[f64],
    marker: usize,
) {
    if row >= inner.height {
        return;
    }

    let label_area = Rect::new(inner.x, inner.y + row, CHART_LABEL_WIDTH.min(inner.width), 1);
    let label_widget = Paragraph::new(Span::styled(
        format!("{:<width$}", label, width = CHART_LABEL_WIDTH as usize),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(label_widget, label_area);

    if inner.width > CHART_LABEL_WIDTH {
        let spark_area = Rect::new(
            inner.x + CHART_LABEL_WIDTH,
            inner.y + row,
            inner.width - CHART_LABEL_WIDTH,
            1,
        );
        frame.render_widget(SeriesSparkline::new(values).marker(marker), spark_area);
    }
}

/// Bold section heading line
fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}
