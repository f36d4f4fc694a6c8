//! Observer that records every broadcast as a tracing event.

use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;
use watch_core::{error::ObserverError, traits::StockObserver, types::Stock};

/// Logs each price change it receives.
#[derive(Debug, Default)]
pub struct ChangeLogger {
    seen: AtomicUsize,
}

impl ChangeLogger {
    /// Create a new change logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of changes logged so far.
    pub fn seen(&self) -> usize {
        self.seen.load(Ordering::Relaxed)
    }
}

impl StockObserver for ChangeLogger {
    fn name(&self) -> &str {
        "change-logger"
    }

    fn description(&self) -> &str {
        "Records every price change in the log"
    }

    fn on_change(&self, stock: &Stock, percent_change: Decimal) -> Result<(), ObserverError> {
        let count = self.seen.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            target: "stock_watch::changes",
            symbol = stock.symbol(),
            price = %stock.price(),
            change_pct = %percent_change.round_dp(2),
            updated_at = %stock.last_update(),
            count,
            "Price changed"
        );
        Ok(())
    }
}
