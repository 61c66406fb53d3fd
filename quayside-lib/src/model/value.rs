//! Value enum for dynamic field values

use std::collections::BTreeMap;
use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::SecondsFormat;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// A dynamic value that can hold any field of a table row.
///
/// Rows coming from a host view have no fixed shape, so every field is stored
/// as a tagged `Value` and looked up by name or [`FieldPath`](super::FieldPath).
///
/// # Natural string form
///
/// The [`Display`](fmt::Display) impl is the "natural form" used for free-text
/// search, default cell display and default sorting:
///
/// | Variant | Display |
/// |---------|---------|
/// | `Null` | empty string |
/// | `Bool` | `true` / `false` |
/// | `Int`, `Decimal` | decimal digits |
/// | `Float` | `3` for `3.0`, shortest form otherwise |
/// | `String` | verbatim |
/// | `Date` | `2024-03-01` |
/// | `DateTime` | `2024-03-01T08:30:00Z` |
/// | `Array`, `Object` | compact JSON, object keys sorted |
///
/// # Example
///
/// ```
/// use quayside_lib::model::Value;
///
/// assert_eq!(Value::from(3.0).to_string(), "3");
/// assert_eq!(Value::from("MSCU1234567").to_string(), "MSCU1234567");
/// assert_eq!(Value::Null.to_string(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Ordered list of values.
    Array(Vec<Value>),
    /// Nested object, keyed by field name.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns the string slice if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Looks up a single path segment inside a container value.
    ///
    /// Objects are indexed by key, arrays by a non-negative integer segment.
    /// Scalars have no children.
    pub fn child(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Converts a JSON value into a `Value`.
    ///
    /// Integral numbers become `Int`, other numbers `Float`. Strings are kept
    /// as strings; no date detection is attempted.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Returns the JSON type name of a JSON value, for error reporting.
    pub(crate) fn json_type_name(json: &serde_json::Value) -> &'static str {
        match json {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write_float(f, *v),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Array(_) | Value::Object(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_infinite() {
        f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else if v == 0.0 {
        // -0.0 prints as 0
        f.write_str("0")
    } else {
        write!(f, "{}", v)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from_json)
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Self {
        Value::Object(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::from_json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from(42i64).to_string(), "42");
        assert_eq!(Value::from(3.0).to_string(), "3");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(-0.0).to_string(), "0");
        assert_eq!(Value::from(Decimal::new(1250, 2)).to_string(), "12.50");
    }

    #[test]
    fn test_display_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(Value::from(date).to_string(), "2024-03-01");

        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        assert_eq!(Value::from(dt).to_string(), "2024-03-01T08:30:00Z");
    }

    #[test]
    fn test_display_nested_is_stable_json() {
        let value = Value::from_json(json!({"row": 3, "block": "A", "tier": [1, 2]}));
        assert_eq!(value.to_string(), r#"{"block":"A","row":3,"tier":[1,2]}"#);
    }

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(Value::from_json(json!(7)), Value::Int(7));
        assert_eq!(Value::from_json(json!(7.25)), Value::Float(7.25));
        assert_eq!(Value::from_json(json!(null)), Value::Null);
    }

    #[test]
    fn test_child_lookup() {
        let value = Value::from_json(json!({"slots": ["A1", "B2"], "block": {"name": "A"}}));
        assert_eq!(
            value.child("block").and_then(|b| b.child("name")),
            Some(&Value::from("A"))
        );
        assert_eq!(
            value.child("slots").and_then(|s| s.child("1")),
            Some(&Value::from("B2"))
        );
        assert_eq!(value.child("slots").and_then(|s| s.child("x")), None);
        assert_eq!(Value::from(1i64).child("anything"), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<String>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default(), Value::Null);
    }
}
