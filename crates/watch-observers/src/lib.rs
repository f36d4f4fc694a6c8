//! Stock observer implementations.
//!
//! This crate provides the observers that react to price changes:
//! - Investor threshold alerts
//! - Push notifications to a user's device
//! - A threshold trading bot
//!
//! Observers write their messages to a [`NotificationSink`](watch_core::traits::NotificationSink).

mod bot;
mod format;
mod investor;
mod push;
mod registry;
mod sink;

pub use bot::{TradeAction, TradingBot, TradingBotConfig};
pub use format::{format_percent, format_price};
pub use investor::{InvestorAlert, InvestorConfig};
pub use push::{PushChannel, PushChannelConfig};
pub use registry::{ObserverInfo, ObserverRegistry};
pub use sink::{ConsoleSink, MemorySink};
