//! Results panel widget.
//!
//! Renders the outcome of the last executed query: a labeled table, the
//! neutral no-rows notice, or an error notice. Before the first execution
//! it shows a usage hint.

use super::table::ResultTable;
use crate::query::QueryOutcome;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Notice shown for a successful query with zero rows.
pub const EMPTY_NOTICE: &str = "Query executed successfully, but no results to display.";

/// Results panel widget.
pub struct ResultsPanel<'a> {
    outcome: Option<&'a (String, QueryOutcome)>,
    scroll: usize,
}

impl<'a> ResultsPanel<'a> {
    /// Creates a new results panel for the given outcome and scroll offset.
    pub fn new(outcome: Option<&'a (String, QueryOutcome)>, scroll: usize) -> Self {
        Self { outcome, scroll }
    }

    /// Builds the panel body as lines, before scrolling is applied.
    pub fn body_lines(&self) -> Vec<Line<'a>> {
        let Some((name, outcome)) = self.outcome else {
            return vec![Line::from(Span::styled(
                "Press Enter to run the selected query.",
                Style::default().fg(Color::DarkGray),
            ))];
        };

        match outcome {
            QueryOutcome::Table(result) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        format!("Results for: {name}"),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::default(),
                ];
                lines.extend(ResultTable::new(result).to_lines());
                lines
            }
            QueryOutcome::Empty => vec![Line::from(Span::styled(
                EMPTY_NOTICE,
                Style::default().fg(Color::Green),
            ))],
            QueryOutcome::Failure(detail) => vec![Line::from(Span::styled(
                format!("An error occurred: {detail}"),
                Style::default().fg(Color::Red),
            ))],
        }
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Results ");

        let lines = self.body_lines();
        let visible: Vec<Line> = lines.into_iter().skip(self.scroll).collect();

        Paragraph::new(visible).block(block).render(area, buf);
    }
}
