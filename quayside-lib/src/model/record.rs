//! Dynamic table record

use indexmap::IndexMap;
use serde::Serialize;

use super::Value;
use crate::error::RecordError;

/// Name of the identifier field every record carries.
pub const ID_FIELD: &str = "id";

/// Anything with a unique string identifier.
pub trait Identifiable {
    /// Unique identifier for this entity.
    ///
    /// Used to route row clicks and actions back to the record.
    fn id(&self) -> &str;
}

/// Trait for rows the table engine can search, sort and render.
///
/// The engine never inspects rows beyond these two accessors, so any type
/// that can expose its top-level fields as [`Value`]s can be tabulated.
/// [`Record`] is the dynamic implementation used by most hosts.
pub trait TableRow: Identifiable {
    /// Returns a top-level field by name.
    fn field(&self, name: &str) -> Option<&Value>;

    /// Iterates over all top-level fields, including the identifier.
    fn fields(&self) -> impl Iterator<Item = (&str, &Value)>;
}

/// A row of dynamic fields.
///
/// Fields keep their insertion order. The identifier is stored as the `id`
/// field, so it is searchable and addressable like any other field.
///
/// # Example
///
/// ```
/// use quayside_lib::model::{Identifiable, Record, TableRow, Value};
///
/// let record = Record::new("c-1")
///     .set("containerNo", "MSCU1234567")
///     .set("weight", 24_000i64);
///
/// assert_eq!(record.id(), "c-1");
/// assert_eq!(record.field("containerNo"), Some(&Value::from("MSCU1234567")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Creates a record holding only its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(ID_FIELD.to_string(), Value::String(id.into()));
        Self { fields }
    }

    /// Sets a field value (builder pattern).
    ///
    /// Setting `id` to a non-string value is ignored; the identifier is
    /// always a string.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        if field == ID_FIELD && value.as_str().is_none() {
            return;
        }
        self.fields.insert(field, value);
    }

    /// Returns the number of top-level fields, including the identifier.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields besides its identifier.
    pub fn is_empty(&self) -> bool {
        self.fields.len() <= 1
    }

    /// Returns the top-level field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    /// Builds a record from a JSON object.
    ///
    /// The object must carry an `id` that is a string or a number; numeric
    /// ids are stored in their decimal string form.
    pub fn from_json(json: serde_json::Value) -> Result<Self, RecordError> {
        let serde_json::Value::Object(map) = json else {
            return Err(RecordError::not_an_object(Value::json_type_name(&json)));
        };

        let id = match map.get(ID_FIELD) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            Some(other) => return Err(RecordError::invalid_id(Value::json_type_name(other))),
            None => return Err(RecordError::MissingId),
        };

        let mut record = Record::new(id);
        for (key, value) in map {
            if key != ID_FIELD {
                record.fields.insert(key, Value::from_json(value));
            }
        }
        Ok(record)
    }

    /// Parses a JSON array of objects into records.
    pub fn many_from_json(text: &str) -> Result<Vec<Self>, RecordError> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        match json {
            serde_json::Value::Array(items) => items.into_iter().map(Record::from_json).collect(),
            other => Err(RecordError::NotAnArray {
                actual: Value::json_type_name(&other),
            }),
        }
    }

    /// Converts any serializable struct into a record.
    ///
    /// The struct must serialize to a JSON object with an `id` field.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, RecordError> {
        Record::from_json(serde_json::to_value(value)?)
    }
}

impl Identifiable for Record {
    fn id(&self) -> &str {
        self.fields
            .get(ID_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl TableRow for Record {
    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}
