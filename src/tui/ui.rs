//! UI rendering.
//!
//! Layout: header bar, query selector, results panel, help line.

use super::app::App;
use super::widgets::{header::Header, results::ResultsPanel, selector::QuerySelector};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

/// Renders the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    // Selector height: one line per name plus borders
    let selector_height = app.names.len() as u16 + 2;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(selector_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, layout[0], app);
    render_selector(frame, layout[1], app);
    render_results(frame, layout[2], app);
    render_help(frame, layout[3]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Header::new(&app.database, app.executing), area);
}

fn render_selector(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(QuerySelector::new(&app.names, app.selected), area);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(
        ResultsPanel::new(app.outcome.as_ref(), app.results_scroll),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Span::styled(
        " ↑/↓ select · Enter execute · PgUp/PgDn scroll · q quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(help, area);
}
