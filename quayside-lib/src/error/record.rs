//! RecordError for decoding rows from JSON

/// Error type for building a [`Record`](crate::model::Record) from external data.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The input has no `id` field.
    #[error("Record is missing the required 'id' field")]
    MissingId,

    /// The `id` field is present but is neither a string nor a number.
    #[error("Record 'id' must be a string or number, got {actual}")]
    InvalidId { actual: &'static str },

    /// The input is not a JSON object.
    #[error("Expected a JSON object for a record, got {actual}")]
    NotAnObject { actual: &'static str },

    /// A record list is not a JSON array.
    #[error("Expected a JSON array of records, got {actual}")]
    NotAnArray { actual: &'static str },

    /// The input could not be parsed or serialized as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RecordError {
    /// Creates a new invalid id error.
    pub fn invalid_id(actual: &'static str) -> Self {
        Self::InvalidId { actual }
    }

    /// Creates a new not-an-object error.
    pub fn not_an_object(actual: &'static str) -> Self {
        Self::NotAnObject { actual }
    }
}
