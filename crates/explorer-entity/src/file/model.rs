//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use explorer_core::types::{FileId, FolderId};

/// A file record. Only metadata is tracked; no content bytes are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// The file name (including extension).
    pub name: String,
    /// The folder containing this file.
    pub folder_id: FolderId,
    /// File size in bytes.
    pub size: i64,
    /// MIME type of the file.
    pub mime_type: Option<String>,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// The file name.
    pub name: String,
    /// The folder to place the file in.
    pub folder_id: FolderId,
    /// File size in bytes.
    pub size: i64,
    /// MIME type.
    pub mime_type: Option<String>,
}

/// Partial update of a file row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFile {
    /// New file name.
    pub name: Option<String>,
    /// New containing folder.
    pub folder_id: Option<FolderId>,
    /// New size in bytes.
    pub size: Option<i64>,
    /// New MIME type (`Some(None)` clears it).
    pub mime_type: Option<Option<String>>,
}

impl UpdateFile {
    /// An update that only renames the file.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// An update that only moves the file.
    pub fn move_to(folder_id: FolderId) -> Self {
        Self {
            folder_id: Some(folder_id),
            ..Self::default()
        }
    }

    /// Check if no fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.folder_id.is_none()
            && self.size.is_none()
            && self.mime_type.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> File {
        let now = Utc::now();
        File {
            id: FileId::new(),
            name: name.to_string(),
            folder_id: FolderId::new(),
            size: 0,
            mime_type: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_file_serializes_camel_case() {
        let json = serde_json::to_value(file("a.pdf")).expect("serialize");
        assert!(json.get("folderId").is_some());
        assert!(json.get("mimeType").is_some());
        assert_eq!(json["size"], 0);
    }

    #[test]
    fn test_update_constructors_touch_one_field() {
        let rename = UpdateFile::rename("b.txt");
        assert_eq!(rename.name.as_deref(), Some("b.txt"));
        assert!(rename.folder_id.is_none() && rename.size.is_none());

        let target = FolderId::new();
        let mv = UpdateFile::move_to(target);
        assert_eq!(mv.folder_id, Some(target));
        assert!(mv.name.is_none() && mv.mime_type.is_none());

        assert!(UpdateFile::default().is_empty());
    }
}
