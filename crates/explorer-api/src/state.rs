//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use explorer_core::config::AppConfig;
use explorer_database::store::{FileStore, FolderStore};
use explorer_service::{FileService, FolderService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Folder store, used directly for health probes
    pub folder_store: Arc<dyn FolderStore>,
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// File service
    pub file_service: Arc<FileService>,
}

impl AppState {
    /// Wires services over the given stores.
    pub fn new(
        config: AppConfig,
        folders: Arc<dyn FolderStore>,
        files: Arc<dyn FileStore>,
    ) -> Self {
        let folder_service = FolderService::new(Arc::clone(&folders), Arc::clone(&files));
        let file_service = FileService::new(files, Arc::clone(&folders));

        Self {
            config: Arc::new(config),
            folder_store: folders,
            folder_service: Arc::new(folder_service),
            file_service: Arc::new(file_service),
        }
    }
}
