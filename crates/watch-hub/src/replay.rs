//! Replay a sequence of ticks through a market.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use watch_core::types::{BroadcastReport, PriceTick};

use crate::Market;

/// A tick that could not be applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedTick {
    /// Symbol of the tick
    pub symbol: String,
    /// Price of the tick
    pub price: Decimal,
    /// Why it was rejected
    pub error: String,
}

/// Totals for a replay run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplaySummary {
    /// Ticks read from the feed
    pub ticks: usize,
    /// Ticks that produced a broadcast
    pub broadcasts: usize,
    /// Ticks that did not change the price
    pub unchanged: usize,
    /// Successful observer deliveries across all broadcasts
    pub deliveries: usize,
    /// Observer failures across all broadcasts
    pub observer_failures: usize,
    /// Reports for each broadcast, in order
    pub reports: Vec<BroadcastReport>,
    /// Ticks that were rejected
    pub rejected: Vec<RejectedTick>,
}

impl ReplaySummary {
    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                     REPLAY SUMMARY                        \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("TICKS\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Processed:           {}\n", self.ticks));
        s.push_str(&format!("  Broadcasts:          {}\n", self.broadcasts));
        s.push_str(&format!("  Unchanged:           {}\n", self.unchanged));
        s.push_str(&format!("  Rejected:            {}\n", self.rejected.len()));
        s.push('\n');

        s.push_str("DELIVERY\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Delivered:           {}\n", self.deliveries));
        s.push_str(&format!("  Observer Failures:   {}\n", self.observer_failures));
        s.push('\n');

        if !self.reports.is_empty() {
            s.push_str("CHANGES\n");
            s.push_str("───────────────────────────────────────────────────────────\n");
            for report in &self.reports {
                s.push_str(&format!(
                    "  {:<8} {:>12.2} {:>8.2}%  ({} notified)\n",
                    report.symbol,
                    report.price,
                    report.percent_change,
                    report.recipients()
                ));
            }
            s.push('\n');
        }

        if !self.rejected.is_empty() {
            s.push_str("REJECTED\n");
            s.push_str("───────────────────────────────────────────────────────────\n");
            for tick in &self.rejected {
                s.push_str(&format!("  {:<8} {:>12}  {}\n", tick.symbol, tick.price, tick.error));
            }
            s.push('\n');
        }

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Apply every tick in order. Rejected ticks are logged and skipped.
pub fn replay(market: &Market, ticks: &[PriceTick]) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for tick in ticks {
        summary.ticks += 1;

        match market.apply(tick) {
            Ok(Some(report)) => {
                summary.broadcasts += 1;
                summary.deliveries += report.delivered;
                summary.observer_failures += report.failures.len();
                summary.reports.push(report);
            }
            Ok(None) => summary.unchanged += 1,
            Err(e) => {
                warn!(symbol = %tick.symbol, price = %tick.price, error = %e, "Tick rejected");
                summary.rejected.push(RejectedTick {
                    symbol: tick.symbol.clone(),
                    price: tick.price,
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        ticks = summary.ticks,
        broadcasts = summary.broadcasts,
        rejected = summary.rejected.len(),
        "Replay complete"
    );

    summary
}
