//! Column descriptors.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::model::FieldPath;
use crate::model::TableRow;

/// Renders a whole row into the display text of one cell.
pub type RenderFn<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Compares two rows for a custom column ordering.
pub type CompareFn<R> = Arc<dyn Fn(&R, &R) -> Ordering + Send + Sync>;

/// How a sortable column orders its rows.
#[derive(Default)]
pub enum SortMode<R> {
    /// Compare the natural string forms with a locale-aware ordering.
    ///
    /// Numeric-looking strings sort lexicographically (`"10"` before `"2"`).
    #[default]
    Text,
    /// Compare resolved values with their typed [`Orderable`](crate::model::Orderable)
    /// ordering: numbers numerically, dates chronologically.
    Typed,
    /// Compare rows with a caller-supplied function.
    Custom(CompareFn<R>),
}

impl<R> Clone for SortMode<R> {
    fn clone(&self) -> Self {
        match self {
            SortMode::Text => SortMode::Text,
            SortMode::Typed => SortMode::Typed,
            SortMode::Custom(f) => SortMode::Custom(Arc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for SortMode<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Text => f.write_str("Text"),
            SortMode::Typed => f.write_str("Typed"),
            SortMode::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Column configuration.
///
/// A column addresses a field of each row by key (a direct field name or a
/// dot-path), labels it with a header, and optionally overrides how the cell
/// is displayed and how the column sorts.
///
/// # Examples
///
/// ```
/// use quayside_lib::model::{Record, TableRow};
/// use quayside_lib::table::{Column, SortMode};
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::new("containerNo", "Container").sortable(),
///     Column::new("yardLocation.block", "Block").sortable(),
///     Column::<Record>::new("weight", "Weight (kg)")
///         .sortable()
///         .sort_mode(SortMode::Typed)
///         .render(|row| format!("{} kg", row.field("weight").map(|v| v.to_string()).unwrap_or_default())),
///     Column::new("status", "Status").style_hint("badge"),
/// ];
/// ```
pub struct Column<R> {
    /// Field addressed by this column.
    pub key: FieldPath,
    /// Column header text.
    pub header: String,
    /// Custom cell renderer; replaces the default value display.
    pub render: Option<RenderFn<R>>,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Opaque styling hint passed through to rendered cells.
    pub style_hint: Option<String>,
    /// Ordering used when this column is the sort column.
    pub sort_mode: SortMode<R>,
}

impl<R> Column<R> {
    /// Create a new column for a field key.
    ///
    /// The key is validated when the table is built.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: FieldPath::new(key),
            header: header.into(),
            render: None,
            sortable: false,
            style_hint: None,
            sort_mode: SortMode::Text,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a custom cell renderer.
    pub fn render(mut self, render: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Set the styling hint.
    pub fn style_hint(mut self, hint: impl Into<String>) -> Self {
        self.style_hint = Some(hint.into());
        self
    }

    /// Set the ordering used when sorting by this column.
    pub fn sort_mode(mut self, mode: SortMode<R>) -> Self {
        self.sort_mode = mode;
        self
    }

    /// Sort with a custom row comparator.
    pub fn compare_with(self, compare: impl Fn(&R, &R) -> Ordering + Send + Sync + 'static) -> Self {
        self.sort_mode(SortMode::Custom(Arc::new(compare)))
    }
}

impl<R: TableRow> Column<R> {
    /// Produces the display text of this column for a row.
    ///
    /// The custom renderer wins when present. Otherwise the resolved value is
    /// shown in its natural form, and a missing value is shown as empty.
    pub fn cell_text(&self, row: &R) -> String {
        match &self.render {
            Some(render) => render(row),
            None => self
                .key
                .resolve(row)
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            render: self.render.clone(),
            sortable: self.sortable,
            style_hint: self.style_hint.clone(),
            sort_mode: self.sort_mode.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("render", &self.render.as_ref().map(|_| ".."))
            .field("sortable", &self.sortable)
            .field("style_hint", &self.style_hint)
            .field("sort_mode", &self.sort_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Identifiable;
    use crate::model::Record;

    fn row() -> Record {
        Record::from_json(json!({
            "id": "c-1",
            "containerNo": "MSCU1234567",
            "yardLocation": {"block": "B"},
            "weight": 24000
        }))
        .unwrap()
    }

    #[test]
    fn test_cell_text_default_display() {
        let column: Column<Record> = Column::new("yardLocation.block", "Block");
        assert_eq!(column.cell_text(&row()), "B");
    }

    #[test]
    fn test_cell_text_missing_is_empty() {
        let column: Column<Record> = Column::new("yardLocation.row", "Row");
        assert_eq!(column.cell_text(&row()), "");
    }

    #[test]
    fn test_cell_text_render_override() {
        let column: Column<Record> =
            Column::<Record>::new("containerNo", "Container").render(|r| format!("#{}", r.id()));
        assert_eq!(column.cell_text(&row()), "#c-1");
    }

    #[test]
    fn test_builder_flags() {
        let column: Column<Record> = Column::new("weight", "Weight")
            .sortable()
            .style_hint("numeric")
            .sort_mode(SortMode::Typed);
        assert!(column.sortable);
        assert_eq!(column.style_hint.as_deref(), Some("numeric"));
        assert!(matches!(column.sort_mode, SortMode::Typed));
    }

    #[test]
    fn test_sort_mode_defaults_to_text() {
        assert!(matches!(SortMode::<Record>::default(), SortMode::Text));
        let column: Column<Record> = Column::new("weight", "Weight").sortable();
        assert!(matches!(column.sort_mode, SortMode::Text));
    }
}
