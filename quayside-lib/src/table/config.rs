//! Table configuration.

use serde::Deserialize;
use serde::Serialize;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default page sizes offered to the user.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Default placeholder shown when no rows match.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data found";

/// Default hint text for the search box.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

/// Options recognised by a [`DataTable`](super::DataTable).
///
/// Every field has a default, so a partial JSON object deserializes:
///
/// ```
/// use quayside_lib::table::TableConfig;
///
/// let config: TableConfig = serde_json::from_str(r#"{"page_size": 20}"#).unwrap();
/// assert_eq!(config.page_size, 20);
/// assert!(config.searchable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Whether the free-text search box is shown.
    pub searchable: bool,
    /// Hint text for the search box.
    pub search_placeholder: String,
    /// Initial page size.
    pub page_size: usize,
    /// Placeholder message for an empty result.
    pub empty_message: String,
    /// Page sizes offered to the user.
    pub page_size_options: Vec<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl TableConfig {
    /// Enable or disable the search box.
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Set the search box hint.
    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Set the initial page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the empty-state message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Set the page sizes offered to the user.
    pub fn page_size_options(mut self, options: impl Into<Vec<usize>>) -> Self {
        self.page_size_options = options.into();
        self
    }

    /// Returns a copy with out-of-range values clamped.
    ///
    /// A zero page size becomes 1. Zero entries are dropped from the options,
    /// and the effective page size is always one of the options.
    pub fn normalized(&self) -> Self {
        let mut config = self.clone();
        if config.page_size == 0 {
            log::warn!("page size 0 is invalid, clamping to 1");
            config.page_size = 1;
        }
        config.page_size_options = page_size_options(&config.page_size_options, config.page_size);
        config
    }
}

/// Merges the current page size into a sorted, de-duplicated option list.
pub fn page_size_options(options: &[usize], current: usize) -> Vec<usize> {
    let mut merged: Vec<usize> = options
        .iter()
        .copied()
        .chain(std::iter::once(current))
        .filter(|size| *size > 0)
        .collect();
    merged.sort_unstable();
    merged.dedup();
    merged
}
