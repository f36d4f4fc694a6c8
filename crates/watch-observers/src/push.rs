//! Push notifications to a user's device.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use watch_core::{
    error::ObserverError,
    traits::{NotificationSink, ObserverConfig, StockObserver},
    types::{Notification, NotificationKind, Stock},
};

use crate::format::{format_percent, format_price};

/// Configuration for a push channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushChannelConfig {
    /// User or device identifier
    pub user_id: String,
}

impl Default for PushChannelConfig {
    fn default() -> Self {
        Self {
            user_id: "user".to_string(),
        }
    }
}

impl ObserverConfig for PushChannelConfig {
    fn validate(&self) -> Result<(), ObserverError> {
        if self.user_id.trim().is_empty() {
            return Err(ObserverError::InvalidConfig(
                "Push channel user id must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Observer that pushes every change to a user's device.
pub struct PushChannel {
    label: String,
    sink: Arc<dyn NotificationSink>,
}

impl PushChannel {
    /// Create a new push channel.
    pub fn new(config: PushChannelConfig, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            label: format!("Mobile {}", config.user_id),
            sink,
        }
    }

    /// Build the push message for a change.
    pub fn message(stock: &Stock, percent_change: Decimal) -> String {
        format!(
            "Push: {} now at {} ({}%)",
            stock.symbol(),
            format_price(stock.price()),
            format_percent(percent_change)
        )
    }
}

impl StockObserver for PushChannel {
    fn name(&self) -> &str {
        &self.label
    }

    fn description(&self) -> &str {
        "Pushes every price change to a user's device"
    }

    fn on_change(&self, stock: &Stock, percent_change: Decimal) -> Result<(), ObserverError> {
        self.sink.deliver(&Notification::new(
            &self.label,
            NotificationKind::Push,
            stock.symbol(),
            Self::message(stock, percent_change),
        ))
    }
}
