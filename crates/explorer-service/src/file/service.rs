//! File CRUD operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::{FileId, FolderId};
use explorer_database::store::{FileStore, FolderStore};
use explorer_entity::file::{CreateFile, File, UpdateFile};

/// Input for [`FileService::create_file`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFile {
    pub name: String,
    pub folder_id: FolderId,
    pub mime_type: Option<String>,
    /// Defaults to 0 when absent.
    pub size: Option<i64>,
}

/// Handles file metadata: creation, rename, move and delete.
#[derive(Clone)]
pub struct FileService {
    /// File store.
    files: Arc<dyn FileStore>,
    /// Folder store (for target folder lookups).
    folders: Arc<dyn FolderStore>,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(files: Arc<dyn FileStore>, folders: Arc<dyn FolderStore>) -> Self {
        Self { files, folders }
    }

    /// Gets a file by ID.
    pub async fn get_file(&self, id: FileId) -> AppResult<File> {
        self.files
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Files directly inside a folder, newest first.
    pub async fn list_files(&self, folder_id: FolderId) -> AppResult<Vec<File>> {
        self.files.get_by_folder_id(folder_id).await
    }

    /// Files anywhere beneath a folder (inclusive), newest first.
    pub async fn list_files_in_subtree(&self, folder_id: FolderId) -> AppResult<Vec<File>> {
        self.files.get_all_in_subtree(folder_id).await
    }

    /// Creates a file record in an existing folder.
    pub async fn create_file(&self, input: NewFile) -> AppResult<File> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation("File name cannot be empty"));
        }

        let size = input.size.unwrap_or(0);
        if size < 0 {
            return Err(AppError::validation("File size cannot be negative"));
        }

        self.require_folder(input.folder_id).await?;

        let file = self
            .files
            .create(&CreateFile {
                name: input.name,
                folder_id: input.folder_id,
                size,
                mime_type: input.mime_type,
            })
            .await?;

        info!(
            file_id = %file.id,
            folder_id = %file.folder_id,
            name = %file.name,
            size = file.size,
            "File created"
        );

        Ok(file)
    }

    /// Renames a file; nothing else changes.
    pub async fn rename_file(&self, id: FileId, new_name: &str) -> AppResult<File> {
        if new_name.trim().is_empty() {
            return Err(AppError::validation("File name cannot be empty"));
        }

        self.get_file(id).await?;

        let file = self
            .files
            .update(id, &UpdateFile::rename(new_name))
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        info!(file_id = %id, name = %file.name, "File renamed");
        Ok(file)
    }

    /// Moves a file to another existing folder; nothing else changes.
    pub async fn move_file(&self, id: FileId, target_folder_id: FolderId) -> AppResult<File> {
        let existing = self.get_file(id).await?;
        self.require_folder(target_folder_id).await?;

        let file = self
            .files
            .update(id, &UpdateFile::move_to(target_folder_id))
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))?;

        info!(
            file_id = %id,
            from = %existing.folder_id,
            to = %target_folder_id,
            "File moved"
        );
        Ok(file)
    }

    /// Deletes a file.
    pub async fn delete_file(&self, id: FileId) -> AppResult<()> {
        self.get_file(id).await?;

        if !self.files.delete(id).await? {
            return Err(AppError::not_found("File not found"));
        }

        info!(file_id = %id, "File deleted");
        Ok(())
    }

    async fn require_folder(&self, folder_id: FolderId) -> AppResult<()> {
        self.folders
            .get_by_id(folder_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Target folder does not exist"))
    }
}
