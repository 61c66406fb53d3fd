//! Quayside table engine
//!
//! A searchable, sortable, paginated data table for terminal operations
//! dashboards. Records are flat or nested JSON-like objects keyed by an `id`
//! field; columns address fields by dot-path and render them to text.
//!
//! - [`model`] - values, records, field paths and schemas
//! - [`table`] - the filter, sort, paginate and render pipeline
//! - [`error`] - error types

pub mod error;
pub mod model;
pub mod table;
