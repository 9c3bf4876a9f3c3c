//! Result table widget.
//!
//! Renders a query result as a box-drawn table with auto-sized columns,
//! styled NULLs, and a row-count footer. The same layout code backs both
//! the TUI rendering and the plain-text output of headless mode.

use crate::db::{QueryResult, Value};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Maximum width for any column.
const MAX_COLUMN_WIDTH: usize = 40;

/// Minimum width for any column.
const MIN_COLUMN_WIDTH: usize = 4;

/// Widget for rendering a query result as a table.
pub struct ResultTable<'a> {
    result: &'a QueryResult,
}

impl<'a> ResultTable<'a> {
    /// Creates a new result table widget.
    pub fn new(result: &'a QueryResult) -> Self {
        Self { result }
    }

    /// Widths per column: widest of header and cell text, clamped to
    /// [MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH]. Widths count characters, not
    /// bytes, matching the formatter's padding.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .result
            .columns
            .iter()
            .map(|col| col.name.chars().count())
            .collect();

        for row in &self.result.rows {
            for (i, value) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(value.to_display_string().chars().count());
                }
            }
        }

        widths
            .iter()
            .map(|&w| w.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH))
            .collect()
    }

    /// Truncates a cell to fit its column, with an ellipsis when room allows.
    ///
    /// Operates on characters so multi-byte text (accented driver and race
    /// names) never splits inside a UTF-8 sequence.
    fn cell_text(s: &str, width: usize) -> String {
        if s.chars().count() <= width {
            s.to_string()
        } else if width <= 3 {
            s.chars().take(width).collect()
        } else {
            let mut text: String = s.chars().take(width - 3).collect();
            text.push_str("...");
            text
        }
    }

    /// Builds a horizontal border string.
    fn border_text(widths: &[usize], left: char, mid: char, right: char) -> String {
        let mut border = String::new();
        border.push(left);
        for (i, &width) in widths.iter().enumerate() {
            border.push_str(&"─".repeat(width + 2));
            if i < widths.len() - 1 {
                border.push(mid);
            }
        }
        border.push(right);
        border
    }

    /// Footer line summarizing the result.
    fn footer_text(&self) -> String {
        format!(
            "{} row{} returned ({}ms)",
            self.result.row_count,
            if self.result.row_count == 1 { "" } else { "s" },
            self.result.execution_time.as_millis()
        )
    }

    /// Renders the table as styled lines for embedding in the results panel.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        if self.result.columns.is_empty() {
            return vec![Line::from(Span::styled(
                "(empty result)",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let widths = self.column_widths();
        let frame_style = Style::default().fg(Color::DarkGray);
        let mut lines = Vec::with_capacity(self.result.rows.len() + 5);

        lines.push(Line::from(Span::styled(
            Self::border_text(&widths, '┌', '┬', '┐'),
            frame_style,
        )));

        // Header row
        let mut spans = vec![Span::styled("│", frame_style)];
        for (col, &width) in self.result.columns.iter().zip(&widths) {
            let name = Self::cell_text(&col.name, width);
            spans.push(Span::styled(
                format!(" {name:width$} "),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("│", frame_style));
        }
        lines.push(Line::from(spans));

        lines.push(Line::from(Span::styled(
            Self::border_text(&widths, '├', '┼', '┤'),
            frame_style,
        )));

        for row in &self.result.rows {
            let mut spans = vec![Span::styled("│", frame_style)];
            for (value, &width) in row.iter().zip(&widths) {
                let text = Self::cell_text(&value.to_display_string(), width);
                let style = if value.is_null() {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC)
                } else {
                    Style::default()
                };
                spans.push(Span::styled(format!(" {text:width$} "), style));
                spans.push(Span::styled("│", frame_style));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(Span::styled(
            Self::border_text(&widths, '└', '┴', '┘'),
            frame_style,
        )));
        lines.push(Line::from(Span::styled(self.footer_text(), frame_style)));

        lines
    }

    /// Renders the table as plain text for headless output.
    pub fn to_plain_text(&self) -> String {
        if self.result.columns.is_empty() {
            return "(empty result)".to_string();
        }

        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&Self::border_text(&widths, '┌', '┬', '┐'));
        out.push('\n');

        out.push('│');
        for (col, &width) in self.result.columns.iter().zip(&widths) {
            let name = Self::cell_text(&col.name, width);
            out.push_str(&format!(" {name:width$} │"));
        }
        out.push('\n');

        out.push_str(&Self::border_text(&widths, '├', '┼', '┤'));
        out.push('\n');

        for row in &self.result.rows {
            out.push('│');
            for (value, &width) in row.iter().zip(&widths) {
                let text = Self::cell_text(&value.to_display_string(), width);
                out.push_str(&format!(" {text:width$} │"));
            }
            out.push('\n');
        }

        out.push_str(&Self::border_text(&widths, '└', '┴', '┘'));
        out.push('\n');
        out.push_str(&self.footer_text());

        out
    }
}

impl Widget for ResultTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, line) in self.to_lines().iter().enumerate() {
            if i >= area.height as usize {
                break;
            }
            buf.set_line(area.x, area.y + i as u16, line, area.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::ColumnInfo;
    use std::time::Duration;

    fn standings_result() -> QueryResult {
        QueryResult::with_data(
            vec![
                ColumnInfo::new("constructor_name", "TEXT"),
                ColumnInfo::new("average_points", "REAL"),
            ],
            vec![
                vec![Value::from("Red Bull"), Value::Float(15.0)],
                vec![Value::from("Ferrari"), Value::Null],
            ],
        )
        .with_execution_time(Duration::from_millis(7))
    }

    #[test]
    fn test_column_widths_respect_bounds() {
        let result = standings_result();
        let widths = ResultTable::new(&result).column_widths();

        // "constructor_name" (16) beats "Red Bull" (8);
        // "average_points" (14) beats "15" and "NULL"
        assert_eq!(widths, vec![16, 14]);
    }

    #[test]
    fn test_cell_text_truncation() {
        assert_eq!(ResultTable::cell_text("Monaco", 10), "Monaco");
        assert_eq!(ResultTable::cell_text("Silverstone", 8), "Silve...");
        assert_eq!(ResultTable::cell_text("Spa", 2), "Sp");
    }

    #[test]
    fn test_cell_text_truncates_on_char_boundaries() {
        assert_eq!(ResultTable::cell_text("Hülkenberg", 8), "Hülke...");
        assert_eq!(ResultTable::cell_text("Hülkenberg", 3), "Hül");

        // A multi-byte char straddling the cut point must not split
        let cell = format!("{}é{}", "a".repeat(36), "x".repeat(8));
        let truncated = ResultTable::cell_text(&cell, 40);
        assert_eq!(truncated.chars().count(), 40);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_render_with_multibyte_overflow_cell() {
        let cell = format!("{}é{}", "a".repeat(36), "x".repeat(8));
        let result = QueryResult::with_data(
            vec![ColumnInfo::new("race_name", "TEXT")],
            vec![vec![Value::from(cell.as_str())]],
        );

        let text = ResultTable::new(&result).to_plain_text();
        assert!(text.contains("..."));

        // Styled rendering shares the same truncation path
        assert_eq!(ResultTable::new(&result).to_lines().len(), 6);
    }

    #[test]
    fn test_to_lines_layout() {
        let result = standings_result();
        let lines = ResultTable::new(&result).to_lines();

        // top border, header, separator, 2 data rows, bottom border, footer
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_to_plain_text_contains_cells_and_footer() {
        let result = standings_result();
        let text = ResultTable::new(&result).to_plain_text();

        assert!(text.contains("constructor_name"));
        assert!(text.contains("Red Bull"));
        assert!(text.contains("NULL"));
        assert!(text.contains("2 rows returned (7ms)"));
    }

    #[test]
    fn test_no_columns_renders_placeholder() {
        let result = QueryResult::new();
        assert_eq!(
            ResultTable::new(&result).to_plain_text(),
            "(empty result)"
        );
        assert_eq!(ResultTable::new(&result).to_lines().len(), 1);
    }
}
