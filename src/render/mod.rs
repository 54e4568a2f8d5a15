//! Serialization of document records to output formats.

mod csv;
mod json;

pub use self::csv::to_csv;
pub use json::{to_json, JsonFormat};
