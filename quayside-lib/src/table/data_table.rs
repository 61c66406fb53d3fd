//! The table engine: columns, configuration and interaction state.

use std::collections::HashSet;
use std::fmt;

use log::debug;
use log::trace;

use super::column::Column;
use super::config::TableConfig;
use super::filter::filter;
use super::page::PageSlice;
use super::page::paginate;
use super::render::PaginationSummary;
use super::render::SearchBox;
use super::render::TableView;
use super::render::render_body;
use super::render::render_headers;
use super::sort::sort;
use super::state::SortState;
use super::state::TableEvent;
use super::state::TableState;
use crate::error::TableError;
use crate::model::Schema;
use crate::model::TableRow;

/// Called with the record of a clicked row.
pub type RowClickHandler<R> = Box<dyn FnMut(&R)>;

/// Called with the record and action name of a row action.
pub type ActionHandler<R> = Box<dyn FnMut(&R, &str)>;

/// Runs filter, sort and paginate over `rows` for the given state.
///
/// This is the whole data pipeline:
/// `paginate(sort(filter(rows, query), column, direction), page, page_size)`.
/// A sort on a column key that is not in `columns` is ignored.
pub fn run_pipeline<'a, R: TableRow>(
    rows: &'a [R],
    columns: &[Column<R>],
    state: &TableState,
) -> PageSlice<'a, R> {
    let filtered = filter(rows, &state.query);
    let filtered_len = filtered.len();

    let (column, direction) = match &state.sort {
        Some(s) => (find_column(columns, s), s.direction),
        None => (None, Default::default()),
    };
    let sorted = sort(filtered, column, direction);
    let page = paginate(&sorted, state.page, state.page_size);

    trace!(
        "pipeline: {} rows, {} matched, page {}/{} with {} rows",
        rows.len(),
        filtered_len,
        page.page(),
        page.total_pages(),
        page.len()
    );
    page
}

fn find_column<'c, R>(columns: &'c [Column<R>], sort: &SortState) -> Option<&'c Column<R>> {
    columns.iter().find(|c| c.key.as_str() == sort.column)
}

/// A searchable, sortable, paginated table over borrowed rows.
///
/// `DataTable<R>` owns the column schema, the configuration and the
/// interaction state. It keeps no rows: every call to [`view`](Self::view) or
/// [`dispatch`](Self::dispatch) takes the current rows and reruns the
/// full pipeline over them.
///
/// # Example
///
/// ```
/// use quayside_lib::model::Record;
/// use quayside_lib::table::{Column, DataTable, TableEvent};
///
/// let rows = vec![
///     Record::new("c-1").set("containerNo", "MSCU1234567"),
///     Record::new("c-2").set("containerNo", "MAEU7654321"),
/// ];
///
/// let mut table = DataTable::builder()
///     .column(Column::new("containerNo", "Container").sortable())
///     .build()
///     .unwrap();
///
/// let view = table.dispatch(TableEvent::query("MSCU"), &rows);
/// assert_eq!(view.body.rows().len(), 1);
/// assert_eq!(view.body.rows()[0].id, "c-1");
/// ```
pub struct DataTable<R> {
    columns: Vec<Column<R>>,
    config: TableConfig,
    state: TableState,
    on_row_click: Option<RowClickHandler<R>>,
    on_action: Option<ActionHandler<R>>,
}

impl<R: TableRow> DataTable<R> {
    /// Starts building a table.
    pub fn builder() -> DataTableBuilder<R> {
        DataTableBuilder::new()
    }

    /// Creates a table with the default configuration.
    pub fn new(columns: Vec<Column<R>>) -> Result<Self, TableError> {
        DataTableBuilder::new().columns(columns).build()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Returns the column definitions.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// Returns the normalized configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the interaction state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Returns the column with the given key.
    pub fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|c| c.key.as_str() == key)
    }

    // -------------------------------------------------------------------------
    // Pipeline
    // -------------------------------------------------------------------------

    /// Runs the pipeline and renders the current view.
    ///
    /// The page is re-clamped against the current result size, so a stale
    /// page number never produces an out-of-range page.
    pub fn view(&mut self, rows: &[R]) -> TableView {
        let page = run_pipeline(rows, &self.columns, &self.state);
        self.state.page = page.page();
        self.render(&page)
    }

    /// Applies an event and returns the re-rendered view.
    pub fn dispatch(&mut self, event: TableEvent, rows: &[R]) -> TableView {
        debug!("table event: {:?}", event);

        match event {
            TableEvent::QueryChanged(query) => self.state.set_query(query),
            TableEvent::HeaderClicked(key) => self.click_header(&key),
            TableEvent::PageSizeChanged(size) => self.state.set_page_size(size),
            TableEvent::NextPage => {
                let count = self.result_count(rows);
                self.state.next_page(count);
            }
            TableEvent::PreviousPage => {
                let count = self.result_count(rows);
                self.state.previous_page(count);
            }
            TableEvent::FirstPage => self.state.first_page(),
            TableEvent::LastPage => {
                let count = self.result_count(rows);
                self.state.last_page(count);
            }
            TableEvent::GoToPage(page) => {
                let count = self.result_count(rows);
                self.state.go_to_page(page, count);
            }
            TableEvent::RowClicked(id) => return self.notify(rows, &id, None),
            TableEvent::Action { id, action } => return self.notify(rows, &id, Some(&action)),
        }

        self.view(rows)
    }

    fn click_header(&mut self, key: &str) {
        match self.column(key).map(|c| c.sortable) {
            Some(true) => {
                let sort = self.state.toggle_sort(key);
                debug!("sorting by {} {:?}", sort.column, sort.direction);
            }
            Some(false) => debug!("column {} is not sortable", key),
            None => debug!("no column with key {}", key),
        }
    }

    fn result_count(&self, rows: &[R]) -> usize {
        filter(rows, &self.state.query).len()
    }

    /// Routes a row click or action to the caller's handler.
    ///
    /// Only rows on the current page can be clicked; other ids are ignored.
    fn notify(&mut self, rows: &[R], id: &str, action: Option<&str>) -> TableView {
        let page = run_pipeline(rows, &self.columns, &self.state);
        self.state.page = page.page();

        match page.rows().iter().find(|row| row.id() == id) {
            Some(row) => match action {
                None => {
                    if let Some(handler) = self.on_row_click.as_mut() {
                        handler(*row);
                    }
                }
                Some(action) => {
                    if let Some(handler) = self.on_action.as_mut() {
                        handler(*row, action);
                    }
                }
            },
            None => debug!("row {} is not visible, ignoring", id),
        }

        self.render(&page)
    }

    fn render(&self, page: &PageSlice<'_, R>) -> TableView {
        TableView {
            search: self.config.searchable.then(|| SearchBox {
                placeholder: self.config.search_placeholder.clone(),
                query: self.state.query.clone(),
            }),
            headers: render_headers(&self.columns, self.state.sort.as_ref()),
            body: render_body(page.rows(), &self.columns, &self.config.empty_message),
            pagination: PaginationSummary::from_page(
                page,
                super::config::page_size_options(
                    &self.config.page_size_options,
                    self.state.page_size,
                ),
            ),
        }
    }
}

impl<R> fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Builder for [`DataTable`].
///
/// `build` validates the column schema: every key must be a well-formed
/// field path, keys must be unique, and when a [`Schema`] is supplied every
/// key must exist in it.
pub struct DataTableBuilder<R> {
    columns: Vec<Column<R>>,
    config: TableConfig,
    schema: Option<Schema>,
    initial_sort: Option<SortState>,
    on_row_click: Option<RowClickHandler<R>>,
    on_action: Option<ActionHandler<R>>,
}

impl<R: TableRow> DataTableBuilder<R> {
    /// Creates an empty builder with the default configuration.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            config: TableConfig::default(),
            schema: None,
            initial_sort: None,
            on_row_click: None,
            on_action: None,
        }
    }

    /// Adds a column.
    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    /// Adds several columns.
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column<R>>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Sets the configuration.
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates column keys against a schema.
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Starts sorted by a column.
    pub fn sort_by(mut self, sort: SortState) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    /// Sets the row click handler.
    pub fn on_row_click(mut self, handler: impl FnMut(&R) + 'static) -> Self {
        self.on_row_click = Some(Box::new(handler));
        self
    }

    /// Sets the row action handler.
    pub fn on_action(mut self, handler: impl FnMut(&R, &str) + 'static) -> Self {
        self.on_action = Some(Box::new(handler));
        self
    }

    /// Validates the columns and builds the table.
    pub fn build(self) -> Result<DataTable<R>, TableError> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            column.key.validate()?;
            if !seen.insert(column.key.as_str()) {
                return Err(TableError::duplicate(column.key.as_str()));
            }
            if let Some(schema) = &self.schema
                && !schema.contains(&column.key)
            {
                return Err(TableError::unknown_field(column.key.as_str()));
            }
        }

        let config = self.config.normalized();
        let mut state = TableState::new(config.page_size);
        if let Some(sort) = self.initial_sort {
            match self.columns.iter().find(|c| c.key.as_str() == sort.column) {
                Some(column) if column.sortable => state.sort = Some(sort),
                _ => debug!("initial sort column {} is not sortable, ignoring", sort.column),
            }
        }

        debug!(
            "built table with {} columns, page size {}",
            self.columns.len(),
            config.page_size
        );

        Ok(DataTable {
            columns: self.columns,
            config,
            state,
            on_row_click: self.on_row_click,
            on_action: self.on_action,
        })
    }
}

impl<R: TableRow> Default for DataTableBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::model::Identifiable;
    use crate::model::Record;
    use crate::table::Direction;
    use crate::table::TableBody;

    fn containers(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::new(format!("c-{}", i)).set("seq", format!("{:03}", i)))
            .collect()
    }

    fn table() -> DataTable<Record> {
        DataTable::builder()
            .column(Column::new("seq", "Seq").sortable())
            .column(Column::new("id", "Id"))
            .build()
            .unwrap()
    }

    fn ids(view: &TableView) -> Vec<String> {
        view.body.rows().iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_build_rejects_invalid_path() {
        let err = DataTable::<Record>::new(vec![Column::new("a..b", "Bad")]).unwrap_err();
        assert!(matches!(err, TableError::InvalidFieldPath { .. }));
    }

    #[test]
    fn test_build_rejects_duplicate_keys() {
        let err = DataTable::<Record>::new(vec![Column::new("a", "A"), Column::new("a", "A2")])
            .unwrap_err();
        assert_eq!(err, TableError::duplicate("a"));
    }

    #[test]
    fn test_build_rejects_unknown_field_with_schema() {
        let rows = containers(2);
        let err = DataTable::<Record>::builder()
            .column(Column::new("seq", "Seq"))
            .column(Column::new("vessel.name", "Vessel"))
            .schema(Schema::infer(&rows))
            .build()
            .unwrap_err();
        assert_eq!(err, TableError::unknown_field("vessel.name"));
    }

    #[test]
    fn test_build_normalizes_zero_page_size() {
        let table = DataTable::<Record>::builder()
            .config(TableConfig::default().page_size(0))
            .build()
            .unwrap();
        assert_eq!(table.state().page_size, 1);
    }

    #[test]
    fn test_initial_sort_requires_sortable_column() {
        let table = DataTable::builder()
            .column(Column::<Record>::new("id", "Id"))
            .sort_by(SortState::new("id", Direction::Asc))
            .build()
            .unwrap();
        assert!(table.state().sort.is_none());
    }

    #[test]
    fn test_view_first_page() {
        let rows = containers(12);
        let mut table = table();
        let view = table.view(&rows);
        assert_eq!(view.body.rows().len(), 10);
        assert_eq!(view.pagination.total_pages, 2);
        assert_eq!(view.pagination.total_entries, 12);
        assert_eq!(view.pagination.available_page_sizes, vec![5, 10, 20, 50]);
        assert!(view.search.is_some());
    }

    #[test]
    fn test_header_click_ignores_unsortable_and_unknown() {
        let rows = containers(3);
        let mut table = table();
        table.dispatch(TableEvent::header("id"), &rows);
        table.dispatch(TableEvent::header("nope"), &rows);
        assert!(table.state().sort.is_none());
    }

    #[test]
    fn test_descending_sort_via_headers() {
        let rows = containers(3);
        let mut table = table();
        table.dispatch(TableEvent::header("seq"), &rows);
        let view = table.dispatch(TableEvent::header("seq"), &rows);
        assert_eq!(ids(&view), vec!["c-3", "c-2", "c-1"]);
        assert_eq!(view.headers[0].text(), "Seq ▼");
    }

    #[test]
    fn test_empty_result_shows_placeholder() {
        let rows = containers(3);
        let mut table = table();
        let view = table.dispatch(TableEvent::query("zzz"), &rows);
        assert_eq!(view.body, TableBody::Empty("No data found".to_string()));
        assert_eq!(view.pagination.total_pages, 1);
        assert_eq!(view.pagination.visible_range_start, 0);
    }

    #[test]
    fn test_row_click_invokes_handler_with_record() {
        let clicked = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&clicked);

        let rows = containers(12);
        let mut table = DataTable::builder()
            .column(Column::new("seq", "Seq"))
            .on_row_click(move |row: &Record| sink.borrow_mut().push(row.id().to_string()))
            .build()
            .unwrap();

        table.dispatch(TableEvent::row("c-2"), &rows);
        // c-11 is on page 2, not visible
        table.dispatch(TableEvent::row("c-11"), &rows);
        assert_eq!(*clicked.borrow(), vec!["c-2".to_string()]);
    }

    #[test]
    fn test_action_invokes_handler_with_name() {
        let actions = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&actions);

        let rows = containers(2);
        let mut table = DataTable::builder()
            .column(Column::new("seq", "Seq"))
            .on_action(move |row: &Record, action: &str| {
                sink.borrow_mut().push(format!("{}:{}", row.id(), action))
            })
            .build()
            .unwrap();

        let before = table.state().clone();
        table.dispatch(TableEvent::action("c-1", "approve"), &rows);
        assert_eq!(*actions.borrow(), vec!["c-1:approve".to_string()]);
        assert_eq!(table.state(), &before);
    }
}
