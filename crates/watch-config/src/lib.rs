//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, ConfigIssue, FeedSettings, LoggingConfig, StockSettings,
};

use config::{Config, ConfigError, Environment, File, FileFormat};
use std::path::Path;

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("STOCK_WATCH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

/// Parse configuration from a TOML string, without environment overrides.
pub fn parse_config(toml: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

/// Render the default configuration as TOML.
pub fn default_config_toml() -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&AppConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = default_config_toml().unwrap();
        let config = parse_config(&text).unwrap();

        assert_eq!(config.stocks.len(), 1);
        assert_eq!(config.stocks[0].symbol, "PETR4");
        assert_eq!(config.investors.len(), 2);
        assert_eq!(config.feed.ticks.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = parse_config(
            r#"
            [logging]
            level = "debug"

            [[stocks]]
            symbol = "VALE3"
            initial_price = "60.00"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.stocks[0].symbol, "VALE3");
        assert_eq!(config.app.name, "stock-watch");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_config(Path::new("/no/such/config.toml")).is_err());
    }
}
