//! Render stage: turns a page of rows into display cells.

use serde::Serialize;

use super::column::Column;
use super::page::PageSlice;
use super::sort::Direction;
use super::state::SortState;
use crate::model::TableRow;

/// A rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Whether clicking the header sorts.
    pub sortable: bool,
    /// Active sort direction, when this is the sort column.
    pub sort: Option<Direction>,
    /// Styling hint copied from the column.
    pub style_hint: Option<String>,
}

impl HeaderCell {
    /// Label followed by the sort indicator, if any.
    pub fn text(&self) -> String {
        match self.sort {
            Some(direction) => format!("{} {}", self.label, direction.indicator()),
            None => self.label.clone(),
        }
    }
}

/// A rendered body cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Display text.
    pub text: String,
    /// Styling hint copied from the column.
    pub style_hint: Option<String>,
}

/// A rendered body row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Identifier of the source record.
    pub id: String,
    /// One cell per column, in column order.
    pub cells: Vec<Cell>,
}

/// Body of a rendered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableBody {
    /// Visible rows.
    Rows(Vec<RenderedRow>),
    /// Placeholder shown instead of zero rows.
    Empty(String),
}

impl TableBody {
    /// Returns the rendered rows, empty for the placeholder.
    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            TableBody::Rows(rows) => rows,
            TableBody::Empty(_) => &[],
        }
    }

    /// Returns `true` for the empty-state placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self, TableBody::Empty(_))
    }
}

/// Pagination footer data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationSummary {
    /// Current page, 1-based.
    pub current_page: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// Number of entries after filtering.
    pub total_entries: usize,
    /// First visible entry, 1-based; 0 when empty.
    pub visible_range_start: usize,
    /// Last visible entry, 1-based; 0 when empty.
    pub visible_range_end: usize,
    /// Current page size.
    pub page_size: usize,
    /// Page sizes the user can pick.
    pub available_page_sizes: Vec<usize>,
}

impl PaginationSummary {
    /// Builds the summary of a page.
    pub fn from_page<R>(page: &PageSlice<'_, R>, available_page_sizes: Vec<usize>) -> Self {
        Self {
            current_page: page.page(),
            total_pages: page.total_pages(),
            total_entries: page.total_entries(),
            visible_range_start: page.range_start(),
            visible_range_end: page.range_end(),
            page_size: page.page_size(),
            available_page_sizes,
        }
    }

    /// Returns `true` if a later page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` if an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

/// Search box model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBox {
    /// Hint text.
    pub placeholder: String,
    /// Current query.
    pub query: String,
}

/// A fully rendered table: what a host view draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Search box, when the table is searchable.
    pub search: Option<SearchBox>,
    /// Header row.
    pub headers: Vec<HeaderCell>,
    /// Body rows or the empty-state placeholder.
    pub body: TableBody,
    /// Pagination footer.
    pub pagination: PaginationSummary,
}

/// Renders the header row.
///
/// Only a sortable column that is the active sort column carries a direction.
pub fn render_headers<R>(columns: &[Column<R>], sort: Option<&SortState>) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key.to_string(),
            label: column.header.clone(),
            sortable: column.sortable,
            sort: sort
                .filter(|s| column.sortable && s.column == column.key.as_str())
                .map(|s| s.direction),
            style_hint: column.style_hint.clone(),
        })
        .collect()
}

/// Renders one row through every column.
pub fn render_row<R: TableRow>(row: &R, columns: &[Column<R>]) -> RenderedRow {
    RenderedRow {
        id: row.id().to_string(),
        cells: columns
            .iter()
            .map(|column| Cell {
                text: column.cell_text(row),
                style_hint: column.style_hint.clone(),
            })
            .collect(),
    }
}

/// Renders the body, falling back to the placeholder when there are no rows.
pub fn render_body<R: TableRow>(
    rows: &[&R],
    columns: &[Column<R>],
    empty_message: &str,
) -> TableBody {
    if rows.is_empty() {
        return TableBody::Empty(empty_message.to_string());
    }
    TableBody::Rows(rows.iter().map(|row| render_row(*row, columns)).collect())
}
