//! Stock price notification CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use watch_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let logging = cli.logging_settings();
    let _log_guard = setup_logging(
        &logging.level,
        logging.format == "json",
        logging.file.as_deref().map(Path::new),
    );

    // Execute command
    match cli.command {
        Commands::Simulate(args) => {
            cli::commands::simulate::run(args, &cli.config, cli.sample).await
        }
        Commands::Observers => cli::commands::observers::run().await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, cli.sample).await,
        Commands::DefaultConfig(args) => cli::commands::default_config::run(args).await,
    }
}
