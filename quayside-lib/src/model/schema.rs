//! Record schema used to validate column keys up front.

use std::collections::BTreeSet;

use super::FieldPath;
use super::TableRow;
use super::Value;

/// The set of field paths known to exist in a record collection.
///
/// Dynamic records carry no declared shape, so the schema is either listed
/// explicitly or inferred from sample rows. A [`DataTable`](crate::table::DataTable)
/// built with a schema rejects columns whose key is not part of it, instead
/// of silently rendering empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    paths: BTreeSet<String>,
}

impl Schema {
    /// Creates a schema from explicit paths.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Infers a schema from rows.
    ///
    /// Every top-level field is included, and every key reachable through
    /// nested objects is included as a dot-path. Array elements are not
    /// enumerated.
    pub fn infer<R: TableRow>(rows: &[R]) -> Self {
        let mut paths = BTreeSet::new();
        for row in rows {
            for (name, value) in row.fields() {
                collect_paths(name.to_string(), value, &mut paths);
            }
        }
        Self { paths }
    }

    /// Returns `true` if the path is part of the schema.
    pub fn contains(&self, path: &FieldPath) -> bool {
        self.paths.contains(path.as_str())
    }

    /// Returns all known paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Returns the number of known paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if no paths are known.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn collect_paths(prefix: String, value: &Value, paths: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (key, child) in map {
            collect_paths(format!("{}.{}", prefix, key), child, paths);
        }
    }
    paths.insert(prefix);
}
