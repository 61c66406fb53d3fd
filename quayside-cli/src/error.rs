//! CLI error type.

use std::path::PathBuf;

use quayside_lib::error::RecordError;
use quayside_lib::error::TableError;
use thiserror::Error;

/// Everything that can stop the `quayside` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid records in {}: {source}", path.display())]
    Records {
        path: PathBuf,
        source: RecordError,
    },
    #[error("invalid column file {}: {source}", path.display())]
    Columns {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("table error: {0}")]
    Table(#[from] TableError),
    #[error("no columns: the record file is empty and no column file was given")]
    NoColumns,
    #[error("cannot sort by '{key}': no sortable column with that key")]
    UnsortableColumn { key: String },
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
