//! Ordering helpers shared by the sort stage.

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::Value;

/// Types with a meaningful typed ordering.
///
/// The default sort compares natural string forms; columns that opt into
/// [`SortMode::Typed`](crate::table::SortMode::Typed) compare through this
/// trait instead, so numbers sort numerically and dates chronologically.
pub trait Orderable {
    /// Compares `self` with `other`.
    fn order(&self, other: &Self) -> Ordering;
}

/// Locale-aware string comparison.
///
/// Letters compare case-insensitively first (`"apple" < "Banana"`). Strings
/// equal under case folding put lowercase before uppercase at the first
/// differing position, and fall back to code point order last so the result
/// is total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

impl Orderable for Value {
    fn order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Decimal(a), Value::Decimal(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => locale_cmp(a, b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => a
                .iter()
                .zip(b)
                .map(|(x, y)| x.order(y))
                .find(|o| o.is_ne())
                .unwrap_or_else(|| a.len().cmp(&b.len())),
            (a, b) if kind_rank(a) != kind_rank(b) => kind_rank(a).cmp(&kind_rank(b)),
            (a, b) if kind_rank(a) == NUMERIC => numeric_cmp(a, b),
            (a, b) if kind_rank(a) == TEMPORAL => instant(a).cmp(&instant(b)),
            (a, b) => locale_cmp(&a.to_string(), &b.to_string()),
        }
    }
}

const NUMERIC: u8 = 2;
const TEMPORAL: u8 = 3;

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Int(_) | Value::Float(_) | Value::Decimal(_) => NUMERIC,
        Value::Date(_) | Value::DateTime(_) => TEMPORAL,
        Value::String(_) => 4,
        Value::Array(_) => 5,
        Value::Object(_) => 6,
    }
}

fn numeric_cmp(a: &Value, b: &Value) -> Ordering {
    match (as_decimal(a), as_decimal(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => as_f64(a).total_cmp(&as_f64(b)),
    }
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Int(i) => Some(Decimal::from(*i)),
        Value::Decimal(d) => Some(*d),
        Value::Float(f) => Decimal::try_from(*f).ok(),
        _ => None,
    }
}

fn as_f64(value: &Value) -> f64 {
    match value {
        Value::Int(i) => *i as f64,
        Value::Float(f) => *f,
        Value::Decimal(d) => d.to_f64().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Date(d) => d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc()),
        Value::DateTime(dt) => Some(*dt),
        _ => None,
    }
}
