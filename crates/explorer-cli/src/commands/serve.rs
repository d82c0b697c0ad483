//! Start the Explorer server.

use clap::Args;

use explorer_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip pending migrations on startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if args.skip_migrations {
        config.database.run_migrations = false;
    }

    println!("Starting Explorer server...");
    println!("  Address: {}", config.server.bind_address());

    let db = super::connect(&config).await?;
    explorer_api::run_server(config, db).await
}
