//! Main dashboard layout.
//!
//! Header, then either the loading indicator, the error panel, or the three
//! report sections, then a one-line status bar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use siteboard_common::constants::{DASHBOARD_SUBTITLE, DASHBOARD_TITLE};
use siteboard_common::types::LogKind;
use siteboard_monitor::DisplayStatus;

use super::section::render_section;
use crate::app::App;

/// Below this width the sections stack vertically.
const MIN_COLUMNS_WIDTH: u16 = 90;

/// Renders the main dashboard view.
pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    let controller = app.controller();
    match controller.status() {
        DisplayStatus::Initializing => render_loading(frame, body),
        DisplayStatus::Degraded => {
            render_error(frame, body, controller.error().unwrap_or_default());
        }
        DisplayStatus::Ready => render_sections(frame, body, app),
    }
    render_status_bar(frame, footer, app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            DASHBOARD_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::styled(DASHBOARD_SUBTITLE, Style::default().fg(Color::Gray)).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    let line = Line::styled(
        "⟳ Loading initial data...",
        Style::default().fg(Color::Blue),
    )
    .centered();
    frame.render_widget(Paragraph::new(line), middle);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let [panel, _] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);
    let block = Block::bordered()
        .title(Span::styled(
            " Error ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(Color::Red));
    let paragraph = Paragraph::new(Line::styled(
        message.to_owned(),
        Style::default().fg(Color::Red),
    ))
    .block(block)
    .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, panel);
}

fn render_sections(frame: &mut Frame, area: Rect, app: &App) {
    let constraints = [Constraint::Ratio(1, 3); 3];
    let areas: [Rect; 3] = if area.width >= MIN_COLUMNS_WIDTH {
        Layout::horizontal(constraints).areas(area)
    } else {
        Layout::vertical(constraints).areas(area)
    };
    let snapshot = app.controller().snapshot();
    for (kind, section_area) in LogKind::ALL.into_iter().zip(areas) {
        render_section(
            frame,
            section_area,
            kind,
            snapshot.section(kind),
            app.scroll(kind),
            app.focus == kind,
        );
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let dim = Style::default().fg(Color::DarkGray);
    let updated = app
        .controller()
        .last_success()
        .map_or_else(|| "never".to_owned(), |t| t.format("%H:%M:%S").to_string());
    let mut spans = vec![
        Span::styled(format!(" {} ", app.base_endpoint()), Style::default().fg(Color::Cyan)),
        Span::styled(format!("· every {}s ", app.poll_interval().as_secs()), dim),
        Span::styled(format!("· updated {updated} "), dim),
    ];
    if app.refreshing {
        spans.push(Span::styled("· refreshing… ", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled("· q quit  r refresh  tab section  ↑↓ scroll", dim));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
