//! Folder entity model.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use explorer_core::types::FolderId;

/// A folder in the explorer hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (`None` for root folders).
    pub parent_id: Option<FolderId>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Listing order shared by every folder listing and the tree:
    /// case-insensitive name, then creation time, then id.
    pub fn display_order(&self, other: &Self) -> Ordering {
        self.name
            .to_lowercase()
            .cmp(&other.name.to_lowercase())
            .then_with(|| self.created_at.cmp(&other.created_at))
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (`None` for root).
    pub parent_id: Option<FolderId>,
}

impl CreateFolder {
    /// Create a root folder record.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
        }
    }

    /// Create a folder record under `parent_id`.
    pub fn child_of(parent_id: FolderId, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: Some(parent_id),
        }
    }
}

/// Partial update of a folder row.
///
/// `parent_id` is doubly optional: `None` leaves the parent untouched,
/// `Some(None)` moves the folder to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFolder {
    /// New folder name.
    pub name: Option<String>,
    /// New parent folder.
    pub parent_id: Option<Option<FolderId>>,
}

impl UpdateFolder {
    /// Create an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the parent folder (`None` for root).
    pub fn parent_id(mut self, parent_id: Option<FolderId>) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    /// Check if no fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.parent_id.is_none()
    }
}
