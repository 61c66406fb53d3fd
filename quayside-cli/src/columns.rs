//! Column definition files.

use std::fs;
use std::path::Path;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use quayside_lib::model::Record;
use quayside_lib::model::TableRow;
use quayside_lib::model::Value;
use quayside_lib::table::Column;
use serde::Deserialize;

use crate::error::CliError;

/// Built-in cell formats a column file can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellFormat {
    /// Upper-cased text.
    Upper,
    /// ISO date or date-time shown as `DD/MM/YYYY`.
    Date,
    /// Number with two decimals and a `$` prefix.
    Currency,
    /// Booleans as `Yes` / `No`.
    YesNo,
}

impl CellFormat {
    /// Formats a value. Values the format does not understand fall back to
    /// their natural form.
    pub fn apply(self, value: &Value) -> String {
        match self {
            CellFormat::Upper => value.to_string().to_uppercase(),
            CellFormat::Date => format_date(value).unwrap_or_else(|| value.to_string()),
            CellFormat::Currency => format_currency(value).unwrap_or_else(|| value.to_string()),
            CellFormat::YesNo => match value {
                Value::Bool(true) => "Yes".to_string(),
                Value::Bool(false) => "No".to_string(),
                other => other.to_string(),
            },
        }
    }
}

fn format_date(value: &Value) -> Option<String> {
    const OUT: &str = "%d/%m/%Y";
    match value {
        Value::Date(d) => Some(d.format(OUT).to_string()),
        Value::DateTime(dt) => Some(dt.format(OUT).to_string()),
        Value::String(s) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.format(OUT).to_string());
            }
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
                return Some(dt.format(OUT).to_string());
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| d.format(OUT).to_string())
        }
        _ => None,
    }
}

fn format_currency(value: &Value) -> Option<String> {
    match value {
        Value::Int(i) => Some(format!("${}.00", i)),
        Value::Float(f) if f.is_finite() => Some(format!("${:.2}", f)),
        Value::Decimal(d) => Some(format!("${:.2}", d)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| format!("${:.2}", f)),
        _ => None,
    }
}

/// One entry of a column file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnSpec {
    /// Field path.
    pub key: String,
    /// Header label.
    pub header: String,
    #[serde(default)]
    pub sortable: bool,
    /// Styling hint.
    #[serde(default)]
    pub style: Option<String>,
    /// Built-in cell format.
    #[serde(default)]
    pub format: Option<CellFormat>,
}

impl ColumnSpec {
    /// Turns this entry into a table column.
    pub fn into_column(self) -> Column<Record> {
        let mut column = Column::new(self.key, self.header);
        if self.sortable {
            column = column.sortable();
        }
        if let Some(style) = self.style {
            column = column.style_hint(style);
        }
        if let Some(format) = self.format {
            let key = column.key.clone();
            column = column.render(move |row: &Record| {
                key.resolve(row)
                    .filter(|v| !v.is_null())
                    .map(|v| format.apply(v))
                    .unwrap_or_default()
            });
        }
        column
    }
}

/// Parses a column file's JSON text.
pub fn parse_columns(text: &str) -> Result<Vec<ColumnSpec>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Loads a column file.
pub fn load_columns(path: &Path) -> Result<Vec<Column<Record>>, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    let specs = parse_columns(&text).map_err(|source| CliError::Columns {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(specs.into_iter().map(ColumnSpec::into_column).collect())
}

/// Derives sortable columns from the first record's top-level fields.
pub fn derive_columns(records: &[Record]) -> Result<Vec<Column<Record>>, CliError> {
    let first = records.first().ok_or(CliError::NoColumns)?;
    Ok(first
        .fields()
        .map(|(name, _)| Column::new(name, name).sortable())
        .collect())
}
