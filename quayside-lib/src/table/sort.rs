//! Sort stage.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use super::column::Column;
use super::column::SortMode;
use crate::model::FieldPath;
use crate::model::Orderable;
use crate::model::TableRow;
use crate::model::Value;
use crate::model::locale_cmp;

static NULL: Value = Value::Null;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }

    /// Header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Direction::Asc => "▲",
            Direction::Desc => "▼",
        }
    }
}

/// Orders rows by a column.
///
/// Without a column the input order is returned unchanged. The sort is
/// stable in both directions: rows that compare equal keep their input order.
pub fn sort<'a, R: TableRow>(
    rows: Vec<&'a R>,
    column: Option<&Column<R>>,
    direction: Direction,
) -> Vec<&'a R> {
    let Some(column) = column else {
        return rows;
    };

    match &column.sort_mode {
        SortMode::Text => sort_by_key(rows, Some(&column.key), direction),
        SortMode::Typed => {
            let mut keyed: Vec<(&Value, &R)> = rows
                .into_iter()
                .map(|row| (column.key.resolve(row).unwrap_or(&NULL), row))
                .collect();
            keyed.sort_by(|a, b| direction.apply(a.0.order(b.0)));
            keyed.into_iter().map(|(_, row)| row).collect()
        }
        SortMode::Custom(compare) => {
            let mut rows = rows;
            rows.sort_by(|a, b| direction.apply(compare(*a, *b)));
            rows
        }
    }
}

/// Orders rows by the natural string form of a field.
///
/// Both sides are coerced to strings and compared with [`locale_cmp`], so
/// numeric-looking values sort lexicographically (`"1"`, `"10"`, `"2"`).
/// A missing value sorts as the empty string.
pub fn sort_by_key<'a, R: TableRow>(
    rows: Vec<&'a R>,
    key: Option<&FieldPath>,
    direction: Direction,
) -> Vec<&'a R> {
    let Some(key) = key else {
        return rows;
    };

    let mut keyed: Vec<(String, &R)> = rows
        .into_iter()
        .map(|row| (sort_text(key, row), row))
        .collect();
    keyed.sort_by(|a, b| direction.apply(locale_cmp(&a.0, &b.0)));
    keyed.into_iter().map(|(_, row)| row).collect()
}

fn sort_text<R: TableRow>(key: &FieldPath, row: &R) -> String {
    key.resolve(row).map(ToString::to_string).unwrap_or_default()
}
