//! Row and value model

mod ordering;
mod path;
mod record;
mod schema;
mod value;

pub use ordering::*;
pub use path::*;
pub use record::*;
pub use schema::*;
pub use value::*;
