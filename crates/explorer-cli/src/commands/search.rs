//! Name search across folders and files.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use explorer_core::error::AppError;
use explorer_entity::file::File;

use super::folder::FolderRow;
use crate::output::{self, OutputFormat};

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring to look for
    pub query: String,
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// File ID
    id: String,
    /// Name
    name: String,
    /// Folder ID
    folder_id: String,
    /// Size in bytes
    size: i64,
    /// MIME type
    mime_type: String,
}

impl From<&File> for FileRow {
    fn from(f: &File) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
            folder_id: f.folder_id.to_string(),
            size: f.size,
            mime_type: f.mime_type.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute the search command
pub async fn execute(
    args: &SearchArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let (folders, _) = super::services(&db);

    let results = folders.search(&args.query).await?;

    match format {
        OutputFormat::Json => output::print_item(&results, format),
        OutputFormat::Table => {
            println!("Folders:");
            let rows: Vec<FolderRow> = results.folders.iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
            println!("Files:");
            let rows: Vec<FileRow> = results.files.iter().map(FileRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
