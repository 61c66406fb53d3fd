//! Quayside command-line host
//!
//! Loads records and column definitions from JSON files and drives a
//! [`DataTable`] over them, either for a single render (`show`) or an
//! interactive session on stdin (`browse`).

pub mod args;
pub mod browse;
pub mod columns;
pub mod config;
pub mod error;
pub mod paths;

use std::fs;
use std::path::Path;

use log::info;
use quayside_lib::model::Record;
use quayside_lib::model::Schema;
use quayside_lib::table::DataTable;
use quayside_lib::table::DataTableBuilder;
use quayside_lib::table::Direction;
use quayside_lib::table::SortState;
use quayside_lib::table::TableEvent;
use quayside_lib::table::TextRenderer;

use crate::args::ShowArgs;
use crate::args::TableArgs;
use crate::config::CliConfig;
use crate::error::CliError;

/// Reads a JSON array of records.
pub fn load_records(path: &Path) -> Result<Vec<Record>, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    let records = Record::many_from_json(&text).map_err(|source| CliError::Records {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Prepares a table builder for the records: columns, schema and config.
pub fn table_builder(
    records: &[Record],
    args: &TableArgs,
    config: &CliConfig,
) -> Result<DataTableBuilder<Record>, CliError> {
    let columns = match &args.columns {
        Some(path) => columns::load_columns(path)?,
        None => columns::derive_columns(records)?,
    };

    let mut table_config = config.table.clone();
    if let Some(page_size) = args.page_size {
        table_config.page_size = page_size;
    }

    let mut builder = DataTable::builder().columns(columns).config(table_config);
    // an empty file has no fields to check column keys against
    if !records.is_empty() {
        builder = builder.schema(Schema::infer(records));
    }
    Ok(builder)
}

/// Renders one page for `quayside show`.
pub fn show(args: &ShowArgs, config: &CliConfig) -> Result<String, CliError> {
    let records = load_records(&args.table.records)?;

    let mut builder = table_builder(&records, &args.table, config)?;
    if let Some(key) = &args.sort {
        let direction = if args.desc {
            Direction::Desc
        } else {
            Direction::Asc
        };
        builder = builder.sort_by(SortState::new(key, direction));
    }
    let mut table = builder.build()?;
    if let Some(key) = &args.sort
        && !table.column(key).is_some_and(|c| c.sortable)
    {
        return Err(CliError::UnsortableColumn { key: key.clone() });
    }

    if let Some(query) = &args.query {
        table.dispatch(TableEvent::query(query), &records);
    }
    let view = table.dispatch(TableEvent::GoToPage(args.page), &records);

    Ok(TextRenderer::new(config.max_cell_width).render(&view))
}
