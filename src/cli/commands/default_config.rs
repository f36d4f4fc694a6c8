//! Print default configuration command.

use anyhow::{Context, Result};
use tracing::info;
use watch_config::default_config_toml;

use crate::cli::DefaultConfigArgs;

pub async fn run(args: DefaultConfigArgs) -> Result<()> {
    let text = default_config_toml().context("Failed to render default configuration")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {:?}", path))?;
            info!("Default configuration written to {:?}", path);
        }
        None => print!("{}", text),
    }

    Ok(())
}
