//! Custom Axum extractors and input parsing helpers.

pub mod json;
pub mod path;

pub use json::ValidatedJson;
pub use path::{parse_file_id, parse_folder_id, parse_parent_id};
