//! Threshold trading bot.
//!
//! Buys on drops of at least `buy_threshold` percent and sells on rises of at
//! least `sell_threshold` percent. Each decision looks only at the current
//! change; nothing is carried between calls.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use watch_core::{
    error::ObserverError,
    traits::{NotificationSink, ObserverConfig, StockObserver},
    types::{Notification, NotificationKind, Stock},
};

use crate::format::format_price;

/// Configuration for the trading bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingBotConfig {
    /// Bot name
    pub name: String,
    /// Buy when the price drops by at least this percentage
    pub buy_threshold: Decimal,
    /// Sell when the price rises by at least this percentage
    pub sell_threshold: Decimal,
}

impl Default for TradingBotConfig {
    fn default() -> Self {
        Self {
            name: "AlgoTrader".to_string(),
            buy_threshold: dec!(2.0),
            sell_threshold: dec!(2.5),
        }
    }
}

impl ObserverConfig for TradingBotConfig {
    fn validate(&self) -> Result<(), ObserverError> {
        if self.name.trim().is_empty() {
            return Err(ObserverError::InvalidConfig(
                "Bot name must not be empty".into(),
            ));
        }
        if self.buy_threshold < Decimal::ZERO || self.sell_threshold < Decimal::ZERO {
            return Err(ObserverError::InvalidConfig(
                "Buy and sell thresholds must not be negative".into(),
            ));
        }
        Ok(())
    }
}

/// Decision taken for one change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "BUY"),
            TradeAction::Sell => write!(f, "SELL"),
            TradeAction::Hold => write!(f, "HOLD"),
        }
    }
}

/// Observer that buys dips and sells rallies.
pub struct TradingBot {
    config: TradingBotConfig,
    sink: Arc<dyn NotificationSink>,
}

impl TradingBot {
    /// Create a new trading bot.
    pub fn new(config: TradingBotConfig, sink: Arc<dyn NotificationSink>) -> Self {
        Self { config, sink }
    }

    /// Decide what to do for a change. Buy is checked before sell.
    pub fn decide(&self, percent_change: Decimal) -> TradeAction {
        if percent_change <= -self.config.buy_threshold {
            TradeAction::Buy
        } else if percent_change >= self.config.sell_threshold {
            TradeAction::Sell
        } else {
            TradeAction::Hold
        }
    }
}

impl StockObserver for TradingBot {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn description(&self) -> &str {
        "Buys drops and sells rises past fixed thresholds"
    }

    fn on_change(&self, stock: &Stock, percent_change: Decimal) -> Result<(), ObserverError> {
        let symbol = stock.symbol();
        self.sink.deliver(&Notification::new(
            &self.config.name,
            NotificationKind::Info,
            symbol,
            format!("Bot {} analyzing {}...", self.config.name, symbol),
        ))?;

        let price = format_price(stock.price());
        let message = match self.decide(percent_change) {
            TradeAction::Buy => format!("BUYING {} at {}", symbol, price),
            TradeAction::Sell => format!("SELLING {} at {}", symbol, price),
            TradeAction::Hold => {
                debug!(bot = %self.config.name, symbol, change_pct = %percent_change, "Holding");
                return Ok(());
            }
        };

        self.sink.deliver(&Notification::new(
            &self.config.name,
            NotificationKind::Trade,
            symbol,
            message,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySink;
    use chrono::Utc;

    fn bot() -> (TradingBot, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let config = TradingBotConfig {
            name: "AlgoTrader".to_string(),
            buy_threshold: dec!(2),
            sell_threshold: dec!(2.5),
        };
        (TradingBot::new(config, sink.clone()), sink)
    }

    #[test]
    fn test_decisions() {
        let (bot, _) = bot();

        assert_eq!(bot.decide(dec!(-3)), TradeAction::Buy);
        assert_eq!(bot.decide(dec!(3)), TradeAction::Sell);
        assert_eq!(bot.decide(dec!(1)), TradeAction::Hold);
        assert_eq!(bot.decide(dec!(-2)), TradeAction::Buy);
        assert_eq!(bot.decide(dec!(2.5)), TradeAction::Sell);
        assert_eq!(bot.decide(dec!(-1.99)), TradeAction::Hold);
    }

    #[test]
    fn test_buy_message() {
        let (bot, sink) = bot();
        let stock = Stock::new("PETR4", dec!(35), Utc::now()).unwrap();

        bot.on_change(&stock, dec!(-6.67)).unwrap();

        let trades = sink.of_kind(NotificationKind::Trade);
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].message, "BUYING PETR4 at 35.00");
    }

    #[test]
    fn test_hold_sends_no_trade() {
        let (bot, sink) = bot();
        let stock = Stock::new("PETR4", dec!(36.2), Utc::now()).unwrap();

        bot.on_change(&stock, dec!(1.97)).unwrap();

        assert!(sink.of_kind(NotificationKind::Trade).is_empty());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_config_validation() {
        assert!(TradingBotConfig::default().validate().is_ok());

        let config = TradingBotConfig {
            sell_threshold: dec!(-1),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
