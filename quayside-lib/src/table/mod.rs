//! The table engine.
//!
//! Rows flow through a fixed pipeline on every interaction:
//!
//! ```text
//! rows -> filter(query) -> sort(column, direction) -> paginate(page, size) -> render
//! ```
//!
//! # Stages
//!
//! - [`filter()`] - case-insensitive substring match over every field
//! - [`sort()`] - stable ordering by a column's [`SortMode`]
//! - [`paginate`] - 1-based page slicing with clamping
//! - [`render_body`] and [`render_headers`] - the [`TableView`] model
//!
//! # Driving a table
//!
//! [`DataTable`] owns the columns, the [`TableConfig`] and the
//! [`TableState`]; [`TableEvent`]s are applied with
//! [`DataTable::dispatch`]. [`TextRenderer`] lays a view out as plain text.

mod column;
mod config;
mod data_table;
mod filter;
mod page;
mod render;
mod sort;
mod state;
mod text;

pub use column::*;
pub use config::*;
pub use data_table::*;
pub use filter::*;
pub use page::*;
pub use render::*;
pub use sort::*;
pub use state::*;
pub use text::*;
