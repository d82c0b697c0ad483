//! Parsing of identifiers from path segments and request bodies.

use explorer_core::error::AppError;
use explorer_core::types::{FileId, FolderId};

/// Parses a folder id, rejecting malformed input as a validation error.
pub fn parse_folder_id(s: &str) -> Result<FolderId, AppError> {
    s.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid folder id: {s}")))
}

/// Parses a file id, rejecting malformed input as a validation error.
pub fn parse_file_id(s: &str) -> Result<FileId, AppError> {
    s.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid file id: {s}")))
}

/// Parses an optional parent id. Absent, `null` and blank strings all mean
/// "no parent".
pub fn parse_parent_id(raw: Option<&str>) -> Result<Option<FolderId>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_folder_id(s).map(Some),
    }
}
