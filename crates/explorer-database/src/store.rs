//! Store traits consumed by the domain services.
//!
//! Both the PostgreSQL repositories and [`crate::MemoryStore`] implement
//! these, so services can be constructed over either backend.

use async_trait::async_trait;

use explorer_core::result::AppResult;
use explorer_core::types::{FileId, FolderId};
use explorer_entity::file::{CreateFile, File, UpdateFile};
use explorer_entity::folder::{CreateFolder, Folder, UpdateFolder};

/// Typed access to folder rows.
#[async_trait]
pub trait FolderStore: Send + Sync + 'static {
    /// Find a folder by ID.
    async fn get_by_id(&self, id: FolderId) -> AppResult<Option<Folder>>;

    /// Every folder row, in no particular order.
    async fn get_all(&self) -> AppResult<Vec<Folder>>;

    /// Folders whose parent is `parent_id`; `None` selects the roots.
    async fn get_children(&self, parent_id: Option<FolderId>) -> AppResult<Vec<Folder>>;

    /// Insert a folder and return the stored row.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Apply a partial update. Returns `None` if no row matched.
    async fn update(&self, id: FolderId, data: &UpdateFolder) -> AppResult<Option<Folder>>;

    /// Ids of every folder beneath `id`, at any depth, excluding `id` itself.
    async fn descendant_ids(&self, id: FolderId) -> AppResult<Vec<FolderId>>;

    /// Delete a folder together with its descendant folders and their files.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: FolderId) -> AppResult<bool>;

    /// Case-insensitive substring match on folder names.
    async fn search(&self, query: &str) -> AppResult<Vec<Folder>>;

    /// Check that the backing store answers.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Typed access to file rows.
#[async_trait]
pub trait FileStore: Send + Sync + 'static {
    /// Find a file by ID.
    async fn get_by_id(&self, id: FileId) -> AppResult<Option<File>>;

    /// Files directly inside `folder_id`, newest first.
    async fn get_by_folder_id(&self, folder_id: FolderId) -> AppResult<Vec<File>>;

    /// Files inside `folder_id` or any of its transitive descendants, newest first.
    async fn get_all_in_subtree(&self, folder_id: FolderId) -> AppResult<Vec<File>>;

    /// Insert a file and return the stored row.
    async fn create(&self, data: &CreateFile) -> AppResult<File>;

    /// Apply a partial update. Returns `None` if no row matched.
    async fn update(&self, id: FileId, data: &UpdateFile) -> AppResult<Option<File>>;

    /// Delete a file. Returns `true` if a row was deleted.
    async fn delete(&self, id: FileId) -> AppResult<bool>;

    /// Case-insensitive substring match on file names, newest first.
    async fn search(&self, query: &str) -> AppResult<Vec<File>>;
}
