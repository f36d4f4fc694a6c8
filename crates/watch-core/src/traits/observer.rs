//! Observer trait definitions.

use crate::error::ObserverError;
use crate::types::Stock;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Configuration trait for observers.
pub trait ObserverConfig: Send + Sync + Clone + 'static {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), ObserverError>;
}

/// Anything that wants to hear about price changes.
///
/// Observers are called synchronously by the subject, one after another, and
/// should return promptly. An `Err` is reported back to the subject but never
/// stops delivery to the remaining observers.
pub trait StockObserver: Send + Sync {
    /// Get the name of this observer, used in logs and failure reports.
    fn name(&self) -> &str;

    /// Handle a price change.
    ///
    /// # Arguments
    /// * `stock` - The stock after the change was applied
    /// * `percent_change` - Signed percentage change from the previous price
    fn on_change(&self, stock: &Stock, percent_change: Decimal) -> Result<(), ObserverError>;

    /// Get a description of the observer.
    fn description(&self) -> &str {
        ""
    }
}

/// Identity comparison for shared observers.
///
/// Two handles are the same observer only if they point at the same allocation.
pub fn same_observer(a: &Arc<dyn StockObserver>, b: &Arc<dyn StockObserver>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}
