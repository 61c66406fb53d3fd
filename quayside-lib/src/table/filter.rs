//! Free-text filter stage.

use crate::model::TableRow;
use crate::model::Value;

/// Keeps the rows whose top-level fields contain `query`.
///
/// Matching is case-insensitive substring search over the natural string form
/// of every top-level scalar field, the identifier included. `Null` fields,
/// nested objects and arrays are skipped: a nested value is only reachable
/// through a dot-path column, never through the free-text query.
///
/// An empty query keeps every row. Input order is preserved.
pub fn filter<'a, R: TableRow>(rows: &'a [R], query: &str) -> Vec<&'a R> {
    if query.is_empty() {
        return rows.iter().collect();
    }

    let needle = query.to_lowercase();
    rows.iter().filter(|row| matches(*row, &needle)).collect()
}

/// Returns `true` if any top-level field of `row` contains `needle`.
///
/// `needle` must already be lower-cased.
pub fn matches<R: TableRow>(row: &R, needle: &str) -> bool {
    row.fields()
        .filter_map(|(_, value)| search_text(value))
        .any(|text| text.contains(needle))
}

/// Lower-cased searchable text of a field, `None` for fields the query skips.
fn search_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => None,
        scalar => Some(scalar.to_string().to_lowercase()),
    }
}
