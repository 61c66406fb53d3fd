//! Plain-text layout of a rendered table.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use super::render::PaginationSummary;
use super::render::TableBody;
use super::render::TableView;

const ELLIPSIS: char = '…';
const COLUMN_GAP: &str = "  ";

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncates a string to a display width, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push(ELLIPSIS);
    result
}

/// Pads a string with spaces up to a display width.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(padding))
}

/// Footer line for a pagination summary.
pub fn footer(summary: &PaginationSummary) -> String {
    format!(
        "Showing {} to {} of {} entries · Page {} of {}",
        summary.visible_range_start,
        summary.visible_range_end,
        summary.total_entries,
        summary.current_page,
        summary.total_pages
    )
}

/// Lays out a [`TableView`] as an aligned text grid.
///
/// ```text
/// Search: mscu
/// Container ▲   Status
/// ------------  -------
/// MSCU1234567   GATE IN
/// Showing 1 to 1 of 1 entries · Page 1 of 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRenderer {
    /// Cells wider than this are truncated.
    pub max_cell_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self { max_cell_width: 32 }
    }
}

impl TextRenderer {
    /// Creates a renderer truncating cells at `max_cell_width`, clamped to at least 1.
    pub fn new(max_cell_width: usize) -> Self {
        Self {
            max_cell_width: max_cell_width.max(1),
        }
    }

    /// Renders the view, one line per output row, without a trailing newline.
    pub fn render(&self, view: &TableView) -> String {
        let headers: Vec<String> = view
            .headers
            .iter()
            .map(|h| truncate_to_width(&h.text(), self.max_cell_width))
            .collect();
        let rows: Vec<Vec<String>> = view
            .body
            .rows()
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|c| truncate_to_width(&c.text, self.max_cell_width))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| display_width(cell))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::new();
        if let Some(search) = &view.search {
            if search.query.is_empty() {
                lines.push(format!("Search: ({})", search.placeholder));
            } else {
                lines.push(format!("Search: {}", search.query));
            }
        }

        if !headers.is_empty() {
            lines.push(join_line(&headers, &widths));
            let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            lines.push(join_line(&rules, &widths));
        }

        match &view.body {
            TableBody::Rows(_) => {
                for row in &rows {
                    lines.push(join_line(row, &widths));
                }
            }
            TableBody::Empty(message) => lines.push(message.clone()),
        }

        lines.push(footer(&view.pagination));
        lines.join("\n")
    }
}

fn join_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_to_width(cell, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}
