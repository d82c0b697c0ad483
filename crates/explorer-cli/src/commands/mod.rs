//! CLI command definitions and dispatch.

pub mod folder;
pub mod migrate;
pub mod search;
pub mod seed;
pub mod serve;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_database::DatabasePool;
use explorer_service::{FileService, FolderService};

use crate::output::OutputFormat;

/// Explorer: folder/file explorer backend
#[derive(Debug, Parser)]
#[command(name = "explorer", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Insert the sample folder hierarchy
    Seed(seed::SeedArgs),
    /// Folder inspection and creation
    Folder(folder::FolderArgs),
    /// Search folder and file names
    Search(search::SearchArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Seed(args) => seed::execute(args, &self.config).await,
            Commands::Folder(args) => folder::execute(args, &self.config, self.format).await,
            Commands::Search(args) => search::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file plus `EXPLORER__` overrides
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_file(config_path)
}

/// Helper: open the database pool described by the configuration
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: folder and file services over PostgreSQL
pub fn services(db: &DatabasePool) -> (FolderService, FileService) {
    let folders = Arc::new(db.folders());
    let files = Arc::new(db.files());
    (
        FolderService::new(folders.clone(), files.clone()),
        FileService::new(files, folders),
    )
}
