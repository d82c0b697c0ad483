//! Folder CRUD, reparenting rules, and combined search.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::FolderId;
use explorer_database::store::{FileStore, FolderStore};
use explorer_entity::file::File;
use explorer_entity::folder::{CreateFolder, Folder, FolderNode, UpdateFolder};

use super::tree::build_forest;

/// Folder and file matches for a single search query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub folders: Vec<Folder>,
    pub files: Vec<File>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}

/// Manages the folder hierarchy.
#[derive(Clone)]
pub struct FolderService {
    /// Folder store.
    folders: Arc<dyn FolderStore>,
    /// File store (search only).
    files: Arc<dyn FileStore>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folders: Arc<dyn FolderStore>, files: Arc<dyn FileStore>) -> Self {
        Self { folders, files }
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, id: FolderId) -> AppResult<Folder> {
        self.folders
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Lists the direct children of `parent_id`, or the roots when `None`.
    pub async fn get_children(&self, parent_id: Option<FolderId>) -> AppResult<Vec<Folder>> {
        self.folders.get_children(parent_id).await
    }

    /// Creates a folder, optionally under an existing parent.
    pub async fn create_folder(&self, name: &str, parent_id: Option<FolderId>) -> AppResult<Folder> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        if let Some(parent_id) = parent_id {
            self.folders
                .get_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent folder does not exist"))?;
        }

        let folder = self
            .folders
            .create(&CreateFolder {
                name: name.to_string(),
                parent_id,
            })
            .await?;

        info!(
            folder_id = %folder.id,
            parent_id = ?folder.parent_id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Renames and/or reparents a folder.
    ///
    /// Reparenting is rejected when the target is the folder itself or any
    /// folder in its subtree, so the hierarchy stays acyclic.
    pub async fn update_folder(&self, id: FolderId, update: UpdateFolder) -> AppResult<Folder> {
        self.get_folder(id).await?;

        if let Some(ref name) = update.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Folder name cannot be empty"));
            }
        }

        if let Some(Some(parent_id)) = update.parent_id {
            self.folders
                .get_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Target parent does not exist"))?;

            if parent_id == id {
                return Err(AppError::validation("Folder cannot be its own parent"));
            }

            if self.is_descendant(id, parent_id).await? {
                return Err(AppError::validation(
                    "Cannot move folder into its own descendant",
                ));
            }
        }

        let folder = self
            .folders
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        info!(
            folder_id = %id,
            parent_id = ?folder.parent_id,
            name = %folder.name,
            "Folder updated"
        );

        Ok(folder)
    }

    /// Deletes a folder; descendant folders and their files go with it.
    pub async fn delete_folder(&self, id: FolderId) -> AppResult<()> {
        self.get_folder(id).await?;

        if !self.folders.delete(id).await? {
            return Err(AppError::not_found("Folder not found"));
        }

        info!(folder_id = %id, "Folder deleted");
        Ok(())
    }

    /// Materializes the whole hierarchy as a forest of root nodes.
    pub async fn build_tree(&self) -> AppResult<Vec<FolderNode>> {
        let all = self.folders.get_all().await?;
        Ok(build_forest(all))
    }

    /// Searches folder and file names. A blank query matches nothing.
    pub async fn search(&self, query: &str) -> AppResult<SearchResults> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResults::default());
        }

        let folders = self.folders.search(query).await?;
        let files = self.files.search(query).await?;

        Ok(SearchResults { folders, files })
    }

    /// Whether `candidate` lies anywhere beneath `ancestor`.
    async fn is_descendant(&self, ancestor: FolderId, candidate: FolderId) -> AppResult<bool> {
        let descendants = self.folders.descendant_ids(ancestor).await?;
        Ok(descendants.contains(&candidate))
    }
}
