//! Interaction state and the events that change it.

use serde::Deserialize;
use serde::Serialize;

use super::page::clamp_page;
use super::page::total_pages;
use super::sort::Direction;

/// Active sort: column key and direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Key of the sort column.
    pub column: String,
    /// Sort direction.
    pub direction: Direction,
}

impl SortState {
    /// Creates a sort state.
    pub fn new(column: impl Into<String>, direction: Direction) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }
}

/// The mutable parameters that drive the pipeline.
///
/// Transitions that depend on the result size take it as an argument; the
/// state itself never holds row data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    /// Free-text query.
    pub query: String,
    /// Current page, 1-based.
    pub page: usize,
    /// Active sort, if any.
    pub sort: Option<SortState>,
    /// Rows per page, at least 1.
    pub page_size: usize,
}

impl TableState {
    /// Creates the initial state: no query, no sort, first page.
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            page: 1,
            sort: None,
            page_size: page_size.max(1),
        }
    }

    /// Sets the query and returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Toggles sorting on a column.
    ///
    /// The same column flips direction; a different column starts ascending.
    /// The page is left as is and re-clamped by the next pipeline run.
    pub fn toggle_sort(&mut self, column: &str) -> &SortState {
        let next = match self.sort.take() {
            Some(current) if current.column == column => {
                SortState::new(column, current.direction.toggled())
            }
            _ => SortState::new(column, Direction::Asc),
        };
        self.sort.insert(next)
    }

    /// Removes the active sort.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Sets the page size and returns to the first page.
    ///
    /// Zero is clamped to 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            log::warn!("page size 0 is invalid, clamping to 1");
        }
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Moves one page forward, stopping at the last page.
    pub fn next_page(&mut self, result_count: usize) {
        self.go_to_page(self.page.saturating_add(1), result_count);
    }

    /// Moves one page back, stopping at the first page.
    pub fn previous_page(&mut self, result_count: usize) {
        self.go_to_page(self.page.saturating_sub(1), result_count);
    }

    /// Jumps to the first page.
    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Jumps to the last page.
    pub fn last_page(&mut self, result_count: usize) {
        self.page = self.total_pages(result_count);
    }

    /// Jumps to a page, clamped into the valid range.
    pub fn go_to_page(&mut self, page: usize, result_count: usize) {
        self.page = clamp_page(page, result_count, self.page_size);
    }

    /// Re-clamps the page after the result size changed.
    pub fn clamp(&mut self, result_count: usize) {
        self.page = clamp_page(self.page, result_count, self.page_size);
    }

    /// Number of pages for a result size.
    pub fn total_pages(&self, result_count: usize) -> usize {
        total_pages(result_count, self.page_size)
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(super::config::DEFAULT_PAGE_SIZE)
    }
}

/// A user interaction with a table.
///
/// Every event is applied synchronously by
/// [`DataTable::dispatch`](super::DataTable::dispatch), which reruns the
/// pipeline and returns the new view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The search text changed.
    QueryChanged(String),
    /// A header was clicked, by column key.
    HeaderClicked(String),
    /// A new page size was picked.
    PageSizeChanged(usize),
    /// Go one page forward.
    NextPage,
    /// Go one page back.
    PreviousPage,
    /// Go to the first page.
    FirstPage,
    /// Go to the last page.
    LastPage,
    /// Go to a specific page.
    GoToPage(usize),
    /// A visible row was clicked, by record id.
    RowClicked(String),
    /// An action in a row's action region was triggered.
    Action {
        /// Record id.
        id: String,
        /// Action name, opaque to the engine.
        action: String,
    },
}

impl TableEvent {
    /// Creates a query change event.
    pub fn query(query: impl Into<String>) -> Self {
        TableEvent::QueryChanged(query.into())
    }

    /// Creates a header click event.
    pub fn header(column: impl Into<String>) -> Self {
        TableEvent::HeaderClicked(column.into())
    }

    /// Creates a row click event.
    pub fn row(id: impl Into<String>) -> Self {
        TableEvent::RowClicked(id.into())
    }

    /// Creates an action event.
    pub fn action(id: impl Into<String>, action: impl Into<String>) -> Self {
        TableEvent::Action {
            id: id.into(),
            action: action.into(),
        }
    }
}
