//! Investor threshold alerts.
//!
//! Every change is acknowledged; changes whose magnitude reaches the
//! investor's threshold also raise an alert.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use watch_core::{
    error::ObserverError,
    traits::{NotificationSink, ObserverConfig, StockObserver},
    types::{Notification, NotificationKind, Stock},
};

use crate::format::format_percent;

/// Configuration for an investor alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestorConfig {
    /// Investor name
    pub name: String,
    /// Alert when the absolute change reaches this percentage
    pub alert_threshold: Decimal,
}

impl Default for InvestorConfig {
    fn default() -> Self {
        Self {
            name: "Investor".to_string(),
            alert_threshold: dec!(5),
        }
    }
}

impl ObserverConfig for InvestorConfig {
    fn validate(&self) -> Result<(), ObserverError> {
        if self.name.trim().is_empty() {
            return Err(ObserverError::InvalidConfig(
                "Investor name must not be empty".into(),
            ));
        }
        if self.alert_threshold < Decimal::ZERO {
            return Err(ObserverError::InvalidConfig(
                "Alert threshold must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Observer that alerts an investor about large moves.
pub struct InvestorAlert {
    config: InvestorConfig,
    sink: Arc<dyn NotificationSink>,
}

impl InvestorAlert {
    /// Create a new investor alert.
    pub fn new(config: InvestorConfig, sink: Arc<dyn NotificationSink>) -> Self {
        Self { config, sink }
    }

    /// Alert threshold in percent.
    pub fn threshold(&self) -> Decimal {
        self.config.alert_threshold
    }

    /// Whether a change of `percent_change` should raise an alert.
    pub fn should_alert(&self, percent_change: Decimal) -> bool {
        percent_change.abs() >= self.config.alert_threshold
    }
}

impl StockObserver for InvestorAlert {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn description(&self) -> &str {
        "Alerts an investor when a move reaches their threshold"
    }

    fn on_change(&self, stock: &Stock, percent_change: Decimal) -> Result<(), ObserverError> {
        self.sink.deliver(&Notification::new(
            &self.config.name,
            NotificationKind::Info,
            stock.symbol(),
            format!("Investor {} notified about {}", self.config.name, stock.symbol()),
        ))?;

        if self.should_alert(percent_change) {
            self.sink.deliver(&Notification::new(
                &self.config.name,
                NotificationKind::Alert,
                stock.symbol(),
                format!(
                    "ALERT! Change of {}% exceeded limit of {}%",
                    format_percent(percent_change),
                    self.config.alert_threshold.normalize()
                ),
            ))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySink;
    use chrono::Utc;

    fn investor(threshold: Decimal) -> (InvestorAlert, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let config = InvestorConfig {
            name: "Maria Santos".to_string(),
            alert_threshold: threshold,
        };
        (InvestorAlert::new(config, sink.clone()), sink)
    }

    #[test]
    fn test_alert_above_threshold() {
        let (investor, sink) = investor(dec!(5));
        let stock = Stock::new("PETR4", dec!(106), Utc::now()).unwrap();

        investor.on_change(&stock, dec!(6)).unwrap();

        let alerts = sink.of_kind(NotificationKind::Alert);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "ALERT! Change of +6.00% exceeded limit of 5%");
        assert_eq!(sink.of_kind(NotificationKind::Info).len(), 1);
    }

    #[test]
    fn test_no_alert_below_threshold() {
        let (investor, sink) = investor(dec!(5));
        let stock = Stock::new("PETR4", dec!(104), Utc::now()).unwrap();

        investor.on_change(&stock, dec!(4)).unwrap();

        assert!(sink.of_kind(NotificationKind::Alert).is_empty());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_threshold_uses_magnitude() {
        let (investor, _) = investor(dec!(3));

        assert!(investor.should_alert(dec!(-6.67)));
        assert!(investor.should_alert(dec!(3)));
        assert!(!investor.should_alert(dec!(-2.99)));
    }

    #[test]
    fn test_config_validation() {
        assert!(InvestorConfig::default().validate().is_ok());

        let config = InvestorConfig {
            alert_threshold: dec!(-1),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = InvestorConfig {
            name: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
