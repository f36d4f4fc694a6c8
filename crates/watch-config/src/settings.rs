//! Configuration structures.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use watch_core::traits::ObserverConfig;
use watch_core::types::PriceTick;
use watch_observers::{InvestorConfig, PushChannelConfig, TradingBotConfig};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub stocks: Vec<StockSettings>,
    #[serde(default)]
    pub investors: Vec<InvestorConfig>,
    #[serde(default)]
    pub push_channels: Vec<PushChannelConfig>,
    #[serde(default)]
    pub bots: Vec<TradingBotConfig>,
    #[serde(default)]
    pub feed: FeedSettings,
}

impl Default for AppConfig {
    /// A single PETR4 session with a couple of investors, a push channel and a bot.
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            logging: LoggingConfig::default(),
            stocks: vec![StockSettings {
                symbol: "PETR4".to_string(),
                initial_price: dec!(35.50),
            }],
            investors: vec![
                InvestorConfig {
                    name: "João Silva".to_string(),
                    alert_threshold: dec!(3.0),
                },
                InvestorConfig {
                    name: "Maria Santos".to_string(),
                    alert_threshold: dec!(5.0),
                },
            ],
            push_channels: vec![PushChannelConfig {
                user_id: "user123".to_string(),
            }],
            bots: vec![TradingBotConfig::default()],
            feed: FeedSettings {
                ticks: vec![
                    PriceTick::new("PETR4", dec!(36.20)),
                    PriceTick::new("PETR4", dec!(37.50)),
                    PriceTick::new("PETR4", dec!(35.00)),
                ],
                csv: None,
            },
        }
    }
}

impl AppConfig {
    /// Check the configuration for problems. Returns every issue found.
    pub fn validate(&self) -> Result<(), Vec<ConfigIssue>> {
        let mut issues = Vec::new();
        let mut symbols = HashSet::new();

        for stock in &self.stocks {
            if stock.symbol.trim().is_empty() {
                issues.push(ConfigIssue::new("stocks", "symbol must not be empty"));
            } else if !symbols.insert(stock.symbol.as_str()) {
                issues.push(ConfigIssue::new(
                    "stocks",
                    format!("duplicate symbol {}", stock.symbol),
                ));
            }
            if stock.initial_price < Decimal::ZERO {
                issues.push(ConfigIssue::new(
                    "stocks",
                    format!("{} has a negative initial price", stock.symbol),
                ));
            }
        }

        let observer_checks = self
            .investors
            .iter()
            .map(|c| ("investors", c.validate()))
            .chain(self.push_channels.iter().map(|c| ("push_channels", c.validate())))
            .chain(self.bots.iter().map(|c| ("bots", c.validate())));
        for (section, result) in observer_checks {
            if let Err(e) = result {
                issues.push(ConfigIssue::new(section, e.to_string()));
            }
        }

        for tick in &self.feed.ticks {
            if !symbols.contains(tick.symbol.as_str()) {
                issues.push(ConfigIssue::new(
                    "feed.ticks",
                    format!("tick for unknown symbol {}", tick.symbol),
                ));
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    /// Total number of configured observers.
    pub fn observer_count(&self) -> usize {
        self.investors.len() + self.push_channels.len() + self.bots.len()
    }
}

/// A problem found while validating configuration.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[{section}] {message}")]
pub struct ConfigIssue {
    /// Section the problem was found in
    pub section: String,
    /// Description of the problem
    pub message: String,
}

impl ConfigIssue {
    fn new(section: &str, message: impl Into<String>) -> Self {
        Self {
            section: section.to_string(),
            message: message.into(),
        }
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-watch".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// A stock to monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSettings {
    pub symbol: String,
    pub initial_price: Decimal,
}

/// Where price ticks come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedSettings {
    /// Ticks listed inline
    #[serde(default)]
    pub ticks: Vec<PriceTick>,
    /// CSV file with `symbol,price` rows, replayed after the inline ticks
    #[serde(default)]
    pub csv: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.observer_count(), 4);
    }

    #[test]
    fn test_validate_collects_issues() {
        let mut config = AppConfig::default();
        config.stocks.push(StockSettings {
            symbol: "PETR4".to_string(),
            initial_price: dec!(-1),
        });
        config.bots[0].buy_threshold = dec!(-2);
        config.feed.ticks.push(PriceTick::new("XPTO", dec!(10)));

        let issues = config.validate().unwrap_err();

        assert_eq!(issues.len(), 4);
        assert!(issues.iter().any(|i| i.message.contains("duplicate symbol PETR4")));
        assert!(issues.iter().any(|i| i.message.contains("negative initial price")));
        assert!(issues.iter().any(|i| i.section == "bots"));
        assert!(issues
            .iter()
            .any(|i| i.to_string() == "[feed.ticks] tick for unknown symbol XPTO"));
    }
}
