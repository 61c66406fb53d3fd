//! TableError for table construction

/// Error type for building a [`DataTable`](crate::table::DataTable).
///
/// These are the only failures the engine reports. Everything that can go wrong
/// while rendering (missing fields, stale pages, zero page sizes) is recovered
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A column key is not a valid field path.
    #[error("Invalid field path '{key}': {reason}")]
    InvalidFieldPath { key: String, reason: &'static str },

    /// Two columns share the same key.
    #[error("Duplicate column key '{key}'")]
    DuplicateColumn { key: String },

    /// A column key does not exist in the record schema.
    #[error("Column key '{key}' does not match any field in the schema")]
    UnknownField { key: String },
}

impl TableError {
    /// Creates a new invalid field path error.
    pub fn invalid_path(key: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidFieldPath {
            key: key.into(),
            reason,
        }
    }

    /// Creates a new duplicate column error.
    pub fn duplicate(key: impl Into<String>) -> Self {
        Self::DuplicateColumn { key: key.into() }
    }

    /// Creates a new unknown field error.
    pub fn unknown_field(key: impl Into<String>) -> Self {
        Self::UnknownField { key: key.into() }
    }
}
