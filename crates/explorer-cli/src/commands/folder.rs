//! Folder inspection and creation commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use explorer_api::extractors::{parse_folder_id, parse_parent_id};
use explorer_core::error::AppError;
use explorer_entity::folder::{Folder, FolderNode};

use crate::output::{self, OutputFormat};

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List root folders, or the children of `--parent`
    List {
        /// Parent folder ID
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// Print the whole folder hierarchy
    Tree,
    /// Create a new folder
    Create {
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Parent folder ID (omit for root)
        #[arg(short, long)]
        parent: Option<String>,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Parent ID
    parent_id: String,
    /// Created at
    created_at: String,
}

impl From<&Folder> for FolderRow {
    fn from(f: &Folder) -> Self {
        Self {
            id: f.id.to_string(),
            name: f.name.clone(),
            parent_id: f.parent_id.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
            created_at: f.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;
    let (folders, _) = super::services(&db);

    match &args.command {
        FolderCommand::List { parent } => {
            let parent_id = parent.as_deref().map(parse_folder_id).transpose()?;
            let children = folders.get_children(parent_id).await?;
            let rows: Vec<FolderRow> = children.iter().map(FolderRow::from).collect();
            output::print_list(&rows, format);
        }
        FolderCommand::Tree => {
            let forest = folders.build_tree().await?;
            match format {
                OutputFormat::Json => output::print_item(&forest, format),
                OutputFormat::Table => {
                    if forest.is_empty() {
                        println!("No folders.");
                    }
                    for line in render_tree(&forest) {
                        println!("{line}");
                    }
                }
            }
        }
        FolderCommand::Create { name, parent } => {
            let parent_id = parse_parent_id(parent.as_deref())?;
            let folder = folders.create_folder(name, parent_id).await?;
            output::print_success(&format!("Folder '{}' created", folder.name));
            output::print_kv("ID", &folder.id.to_string());
            if let Some(parent_id) = folder.parent_id {
                output::print_kv("Parent", &parent_id.to_string());
            }
        }
    }

    db.close().await;
    Ok(())
}

/// Renders a forest as indented lines, one folder per line.
fn render_tree(forest: &[FolderNode]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut stack: Vec<(&FolderNode, usize)> = forest.iter().rev().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        lines.push(format!("{}{}/", "  ".repeat(depth), node.folder.name));
        stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }
    lines
}
