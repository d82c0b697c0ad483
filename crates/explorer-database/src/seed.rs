//! Sample data for local development.

use tracing::info;

use explorer_core::result::AppResult;
use explorer_entity::file::CreateFile;
use explorer_entity::folder::CreateFolder;

use crate::store::{FileStore, FolderStore};

/// Counts of rows written by [`seed_sample_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub folders: usize,
    pub files: usize,
}

/// Insert a small sample hierarchy:
///
/// ```text
/// Documents/
///   Personal/
///   Work/
///   tes.pdf
/// Pictures/
///   Vacation 2024/
/// ```
///
/// The seed is not idempotent; running it twice inserts a second copy.
pub async fn seed_sample_data(
    folders: &dyn FolderStore,
    files: &dyn FileStore,
) -> AppResult<SeedSummary> {
    let documents = folders.create(&CreateFolder::root("Documents")).await?;
    let pictures = folders.create(&CreateFolder::root("Pictures")).await?;

    folders
        .create(&CreateFolder::child_of(documents.id, "Work"))
        .await?;
    folders
        .create(&CreateFolder::child_of(documents.id, "Personal"))
        .await?;
    folders
        .create(&CreateFolder::child_of(pictures.id, "Vacation 2024"))
        .await?;

    files
        .create(&CreateFile {
            name: "tes.pdf".to_string(),
            folder_id: documents.id,
            size: 1024,
            mime_type: Some("application/pdf".to_string()),
        })
        .await?;

    let summary = SeedSummary {
        folders: 5,
        files: 1,
    };
    info!(
        folders = summary.folders,
        files = summary.files,
        "Sample data seeded"
    );
    Ok(summary)
}
