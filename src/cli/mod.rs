//! CLI definitions.

pub mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use watch_config::{load_config, AppConfig, LoggingConfig};

#[derive(Parser)]
#[command(name = "stock-watch")]
#[command(author, version, about = "Push-based stock price notifications")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Use the built-in sample session instead of a configuration file
    #[arg(long)]
    pub sample: bool,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Logging settings from the configuration file, with command-line overrides applied.
    pub fn logging_settings(&self) -> LoggingConfig {
        let mut logging = if self.sample {
            LoggingConfig::default()
        } else {
            load_config(&self.config)
                .map(|c| c.logging)
                .unwrap_or_default()
        };

        if let Some(level) = &self.log_level {
            logging.level = level.as_str().to_string();
        }
        if self.json_logs {
            logging.format = "json".to_string();
        }
        if let Some(file) = &self.log_file {
            logging.file = Some(file.display().to_string());
        }

        logging
    }
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay price ticks through the configured observers
    Simulate(SimulateArgs),
    /// List available observer kinds
    Observers,
    /// Validate configuration
    ValidateConfig,
    /// Print the default configuration
    DefaultConfig(DefaultConfigArgs),
}

#[derive(clap::Args)]
pub struct SimulateArgs {
    /// CSV file of `symbol,price` ticks (replayed after configured ticks)
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save the replay summary as JSON
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Do not print observer messages
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args)]
pub struct DefaultConfigArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Load the application configuration, or the sample session.
pub fn load_app_config(path: &Path, sample: bool) -> Result<AppConfig> {
    if sample {
        return Ok(AppConfig::default());
    }
    load_config(path).with_context(|| format!("Failed to load configuration from {:?}", path))
}
