//! Validate configuration command.

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::load_app_config;

pub async fn run(config_path: &Path, sample: bool) -> Result<()> {
    if sample {
        println!("Validating built-in sample configuration");
    } else {
        println!("Validating configuration: {:?}", config_path);
    }

    let config = match load_app_config(config_path, sample) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {:#}", e);
            return Err(e);
        }
    };

    if let Err(issues) = config.validate() {
        for issue in &issues {
            println!("  ✗ {}", issue);
        }
        bail!("Configuration has {} problem(s)", issues.len());
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Stocks: {}", config.stocks.len());
    for stock in &config.stocks {
        println!("  {} @ {:.2}", stock.symbol, stock.initial_price);
    }
    println!("Observers: {}", config.observer_count());
    println!("Inline ticks: {}", config.feed.ticks.len());
    if let Some(csv) = &config.feed.csv {
        println!("CSV feed: {}", csv);
    }

    Ok(())
}
