//! Query selector widget.
//!
//! Single-choice list of catalog query names; the highlighted entry is the
//! one Enter will execute.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Selector widget over the catalog names.
pub struct QuerySelector<'a> {
    names: &'a [&'static str],
    selected: usize,
}

impl<'a> QuerySelector<'a> {
    /// Creates a new selector with the given names and selection index.
    pub fn new(names: &'a [&'static str], selected: usize) -> Self {
        Self { names, selected }
    }
}

impl Widget for QuerySelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Select a query to execute: ");

        let lines: Vec<Line> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == self.selected {
                    Line::from(Span::styled(
                        format!("> {name}"),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::raw(format!("  {name}")))
                }
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
