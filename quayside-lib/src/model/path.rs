//! Field paths for addressing nested values.

use std::fmt;
use std::str::FromStr;

use super::TableRow;
use super::Value;
use crate::error::TableError;

/// Separator between segments of a dot-path.
pub const PATH_SEPARATOR: char = '.';

/// A parsed column key: a direct field name or a dot-separated path.
///
/// `"status"` addresses a top-level field, `"yardLocation.block"` the `block`
/// key of the object stored in `yardLocation`. Array elements are addressed
/// by index (`"slots.0"`).
///
/// # Example
///
/// ```
/// use quayside_lib::model::{FieldPath, Record, Value};
/// use serde_json::json;
///
/// let record = Record::from_json(json!({
///     "id": "c-1",
///     "yardLocation": {"block": "A", "row": 3}
/// })).unwrap();
///
/// let path: FieldPath = "yardLocation.block".parse().unwrap();
/// assert_eq!(path.resolve(&record), Some(&Value::from("A")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    key: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Creates a path without validating it.
    ///
    /// An invalid path (empty key or empty segment) never resolves to a value.
    /// Use [`FieldPath::parse`] or [`FieldPath::validate`] to reject it.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let segments = key.split(PATH_SEPARATOR).map(str::to_string).collect();
        Self { key, segments }
    }

    /// Parses a column key.
    ///
    /// Fails on an empty key or an empty segment (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(key: &str) -> Result<Self, TableError> {
        let path = Self::new(key);
        path.validate()?;
        Ok(path)
    }

    /// Checks that the path is well formed.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.key.is_empty() {
            return Err(TableError::invalid_path(&self.key, "key is empty"));
        }
        if self.segments.iter().any(String::is_empty) {
            return Err(TableError::invalid_path(&self.key, "path has an empty segment"));
        }
        Ok(())
    }

    /// Returns the key as written.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Returns the path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the top-level field name the path starts from.
    pub fn root(&self) -> &str {
        &self.segments[0]
    }

    /// Returns `true` if the path addresses a nested field.
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// Resolves the path against a row.
    ///
    /// Returns `None` as soon as a segment is missing, an intermediate value
    /// is `Null`, or an intermediate value is not a container.
    pub fn resolve<'a, R: TableRow>(&self, row: &'a R) -> Option<&'a Value> {
        if self.key.is_empty() {
            return None;
        }
        let (first, rest) = self.segments.split_first()?;
        rest.iter()
            .try_fold(row.field(first)?, |value, segment| value.child(segment))
    }
}

impl FromStr for FieldPath {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::parse(s)
    }
}

impl From<&str> for FieldPath {
    fn from(value: &str) -> Self {
        FieldPath::new(value)
    }
}

impl From<String> for FieldPath {
    fn from(value: String) -> Self {
        FieldPath::new(value)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::Record;

    fn container() -> Record {
        Record::from_json(json!({
            "id": "c-1",
            "containerNo": "MSCU1234567",
            "yardLocation": {"block": "A", "row": 3, "bay": null},
            "seals": ["S1", "S2"]
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_direct_key() {
        let path = FieldPath::parse("containerNo").unwrap();
        assert!(!path.is_nested());
        assert_eq!(path.root(), "containerNo");
    }

    #[test]
    fn test_parse_rejects_empty_segments() {
        assert!(FieldPath::parse("").is_err());
        assert!(FieldPath::parse("a..b").is_err());
        assert!(FieldPath::parse(".a").is_err());
        assert!(FieldPath::parse("a.").is_err());
    }

    #[test]
    fn test_unvalidated_path_never_resolves_empty_key() {
        let path = FieldPath::new("");
        assert!(path.validate().is_err());
        assert_eq!(path.resolve(&container()), None);
    }

    #[test]
    fn test_resolve_direct() {
        let path = FieldPath::parse("containerNo").unwrap();
        assert_eq!(path.resolve(&container()), Some(&Value::from("MSCU1234567")));
    }

    #[test]
    fn test_resolve_nested() {
        let path = FieldPath::parse("yardLocation.row").unwrap();
        assert_eq!(path.resolve(&container()), Some(&Value::Int(3)));
    }

    #[test]
    fn test_resolve_array_index() {
        let path = FieldPath::parse("seals.1").unwrap();
        assert_eq!(path.resolve(&container()), Some(&Value::from("S2")));
    }

    #[test]
    fn test_resolve_short_circuits_on_missing() {
        let record = container();
        assert_eq!(FieldPath::parse("missing.block").unwrap().resolve(&record), None);
        assert_eq!(FieldPath::parse("yardLocation.bay.x").unwrap().resolve(&record), None);
        assert_eq!(FieldPath::parse("containerNo.length").unwrap().resolve(&record), None);
    }

    #[test]
    fn test_resolve_null_leaf() {
        let path = FieldPath::parse("yardLocation.bay").unwrap();
        assert_eq!(path.resolve(&container()), Some(&Value::Null));
    }
}
