//! Notification hubs for stock price changes.
//!
//! A [`NotificationHub`] owns one stock and the observers interested in it.
//! A [`Market`] groups independent hubs by symbol, and [`replay`] drives a
//! sequence of ticks through a market.

mod hub;
mod market;
mod replay;

pub use hub::NotificationHub;
pub use market::Market;
pub use replay::{replay, RejectedTick, ReplaySummary};
