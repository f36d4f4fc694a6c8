//! Observer registry for building observers from configuration.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use watch_core::{
    error::ObserverError,
    traits::{NotificationSink, ObserverConfig, StockObserver},
};

use crate::{
    InvestorAlert, InvestorConfig, PushChannel, PushChannelConfig, TradingBot, TradingBotConfig,
};

/// Information about a registered observer kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObserverInfo {
    /// Kind key used in configuration
    pub kind: String,
    /// Display name
    pub name: String,
    /// Observer description
    pub description: String,
    /// Default configuration as JSON
    pub default_config: serde_json::Value,
}

/// Registry for available observer kinds.
pub struct ObserverRegistry {
    kinds: BTreeMap<String, ObserverInfo>,
}

impl ObserverRegistry {
    /// Create a registry with all built-in observer kinds.
    pub fn new() -> Self {
        let mut kinds = BTreeMap::new();

        kinds.insert(
            "investor".to_string(),
            ObserverInfo {
                kind: "investor".to_string(),
                name: "Investor Alert".to_string(),
                description: "Alerts an investor when a move reaches their threshold".to_string(),
                default_config: to_json(&InvestorConfig::default()),
            },
        );

        kinds.insert(
            "push".to_string(),
            ObserverInfo {
                kind: "push".to_string(),
                name: "Push Channel".to_string(),
                description: "Pushes every price change to a user's device".to_string(),
                default_config: to_json(&PushChannelConfig::default()),
            },
        );

        kinds.insert(
            "bot".to_string(),
            ObserverInfo {
                kind: "bot".to_string(),
                name: "Trading Bot".to_string(),
                description: "Buys drops and sells rises past fixed thresholds".to_string(),
                default_config: to_json(&TradingBotConfig::default()),
            },
        );

        Self { kinds }
    }

    /// List all observer kinds.
    pub fn list(&self) -> Vec<&ObserverInfo> {
        self.kinds.values().collect()
    }

    /// Get observer info by kind.
    pub fn get(&self, kind: &str) -> Option<&ObserverInfo> {
        self.kinds.get(kind)
    }

    /// Check if an observer kind exists.
    pub fn exists(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Create an observer from JSON configuration.
    pub fn create(
        &self,
        kind: &str,
        config: serde_json::Value,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Arc<dyn StockObserver>, ObserverError> {
        match kind {
            "investor" => {
                let config: InvestorConfig = parse(config)?;
                Ok(Arc::new(InvestorAlert::new(config, sink)))
            }
            "push" => {
                let config: PushChannelConfig = parse(config)?;
                Ok(Arc::new(PushChannel::new(config, sink)))
            }
            "bot" => {
                let config: TradingBotConfig = parse(config)?;
                Ok(Arc::new(TradingBot::new(config, sink)))
            }
            _ => Err(ObserverError::NotFound(kind.to_string())),
        }
    }

    /// Create an observer with default configuration.
    pub fn create_default(
        &self,
        kind: &str,
        sink: Arc<dyn NotificationSink>,
    ) -> Result<Arc<dyn StockObserver>, ObserverError> {
        let info = self
            .get(kind)
            .ok_or_else(|| ObserverError::NotFound(kind.to_string()))?;
        self.create(kind, info.default_config.clone(), sink)
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(config: &T) -> serde_json::Value {
    serde_json::to_value(config).unwrap_or_default()
}

fn parse<T: ObserverConfig + DeserializeOwned>(value: serde_json::Value) -> Result<T, ObserverError> {
    let config: T =
        serde_json::from_value(value).map_err(|e| ObserverError::InvalidConfig(e.to_string()))?;
    config.validate()?;
    Ok(config)
}
