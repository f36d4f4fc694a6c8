//! Subject trait definitions.

use crate::traits::StockObserver;
use crate::types::{BroadcastReport, Stock};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Owner of an observer list that broadcasts changes to it.
///
/// Methods take `&self` so that observers may adjust subscriptions from inside
/// their own callback; implementations must broadcast over a snapshot taken
/// when the broadcast starts.
pub trait StockSubject: Send + Sync {
    /// Register an observer.
    ///
    /// Returns `false` if this exact observer (by identity) is already registered.
    fn subscribe(&self, observer: Arc<dyn StockObserver>) -> bool;

    /// Remove an observer by identity.
    ///
    /// Returns `false` if the observer was not registered.
    fn unsubscribe(&self, observer: &Arc<dyn StockObserver>) -> bool;

    /// Deliver a change to every registered observer, in registration order.
    fn notify_all(&self, stock: &Stock, percent_change: Decimal) -> BroadcastReport;

    /// Number of registered observers.
    fn subscriber_count(&self) -> usize;
}
