//! Request DTOs with validation.
//!
//! Ids arrive as strings and are parsed in the handlers so that malformed
//! values surface as validation errors.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Keeps `null` distinct from an absent field: absent stays `None`,
/// `null` becomes `Some(None)`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// POST /api/v1/folders
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, message = "Folder name is required"))]
    pub name: String,
    /// Parent folder id; absent, `null` or `""` creates a root folder.
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// PUT /api/v1/folders/{id}
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFolderRequest {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New parent: absent leaves it, `null` or `""` moves to the root.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub parent_id: Option<Option<String>>,
}

/// POST /api/v1/files
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    /// File name.
    #[validate(length(min = 1, message = "File name is required"))]
    pub name: String,
    /// Containing folder id.
    pub folder_id: String,
    /// MIME type.
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Size in bytes (defaults to 0).
    #[serde(default)]
    #[validate(range(min = 0, message = "File size cannot be negative"))]
    pub size: Option<i64>,
}

/// PUT /api/v1/files/{id}
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameFileRequest {
    /// New file name.
    #[validate(length(min = 1, message = "File name is required"))]
    pub name: String,
}

/// PUT /api/v1/files/{id}/move
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MoveFileRequest {
    /// Destination folder id.
    pub target_folder_id: String,
}

/// Query for GET /api/v1/folders/search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Search text; missing or blank matches nothing.
    #[serde(default)]
    pub q: Option<String>,
}

/// Query for GET /api/v1/folders/{id}/files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListFilesQuery {
    /// Include files from every descendant folder.
    #[serde(default)]
    pub recursive: Option<String>,
}

impl ListFilesQuery {
    /// Whether `recursive` was set to a truthy value.
    pub fn is_recursive(&self) -> bool {
        self.recursive
            .as_deref()
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "true" | "1"))
    }
}
