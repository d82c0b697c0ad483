//! Sample data seeding.

use clap::Args;

use explorer_core::error::AppError;
use explorer_database::seed::seed_sample_data;

use crate::output;

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, config_path: &str) -> Result<(), AppError> {
    if !args.yes {
        let confirm = dialoguer::Confirm::new()
            .with_prompt("Insert sample folders and files? Running twice creates duplicates.")
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let config = super::load_config(config_path)?;
    let db = super::connect(&config).await?;

    let summary = seed_sample_data(&db.folders(), &db.files()).await?;
    output::print_success(&format!(
        "Seeded {} folders and {} files.",
        summary.folders, summary.files
    ));

    db.close().await;
    Ok(())
}
