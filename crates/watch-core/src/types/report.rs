//! Broadcast outcome reporting.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::Stock;

/// An observer that failed during a broadcast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryFailure {
    /// Observer name
    pub observer: String,
    /// Error text
    pub error: String,
}

/// Outcome of one broadcast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BroadcastReport {
    /// Symbol that moved
    pub symbol: String,
    /// Price that was broadcast
    pub price: Decimal,
    /// Signed percentage change that was broadcast
    pub percent_change: Decimal,
    /// Timestamp of the price change
    pub timestamp: DateTime<Utc>,
    /// Number of observers that handled the change successfully
    pub delivered: usize,
    /// Observers that returned an error
    pub failures: Vec<DeliveryFailure>,
}

impl BroadcastReport {
    /// Create an empty report for a change on `stock`.
    pub fn new(stock: &Stock, percent_change: Decimal) -> Self {
        Self {
            symbol: stock.symbol().to_string(),
            price: stock.price(),
            percent_change,
            timestamp: stock.last_update(),
            delivered: 0,
            failures: Vec::new(),
        }
    }

    /// Total number of observers in the broadcast snapshot.
    pub fn recipients(&self) -> usize {
        self.delivered + self.failures.len()
    }

    /// Whether every observer handled the change.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
