//! Database migration management commands.

use clap::{Args, Subcommand};

use explorer_core::error::AppError;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;
    // Run explicitly below rather than as a side effect of connecting.
    config.database.run_migrations = false;
    let db = super::connect(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            explorer_database::migration::run_migrations(db.pool()).await?;
            output::print_success("All migrations applied.");
        }
    }

    db.close().await;
    Ok(())
}
