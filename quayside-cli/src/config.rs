//! CLI configuration file.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use log::info;
use quayside_lib::table::TableConfig;
use serde::Deserialize;
use serde::Serialize;

use crate::error::CliError;

/// Default maximum cell width for the text grid.
pub const DEFAULT_MAX_CELL_WIDTH: usize = 32;

/// Contents of `config.json`.
///
/// ```json
/// {
///   "table": { "page_size": 20, "empty_message": "No containers" },
///   "max_cell_width": 24
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Table engine options.
    pub table: TableConfig,
    /// Cells wider than this are truncated with `…`.
    pub max_cell_width: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            table: TableConfig::default(),
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
        }
    }
}

impl CliConfig {
    /// Loads the config from `path`, or the defaults when the file is missing.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(CliError::read(path, e)),
        };

        let config = serde_json::from_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the config from an explicit path or the platform default.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, CliError> {
        match explicit {
            Some(path) => Self::load(path),
            None => match crate::paths::config_file() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }
}
