//! Notification hub for a single monitored stock.

use rust_decimal::Decimal;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};
use tracing::{debug, info, warn};
use watch_core::{
    error::HubError,
    traits::{same_observer, StockObserver, StockSubject},
    types::{percent_change, validate_price, BroadcastReport, DeliveryFailure, Stock},
};

/// Subject that owns a stock and broadcasts its price changes.
///
/// Observers are notified synchronously, in subscription order, over a
/// snapshot of the observer list taken when the broadcast starts. Updates
/// from different threads are serialized; an observer that tries to update
/// the same hub from inside its own callback gets [`HubError::ReentrantUpdate`].
pub struct NotificationHub {
    symbol: String,
    stock: Mutex<Stock>,
    observers: Mutex<Vec<Arc<dyn StockObserver>>>,
    update_lock: Mutex<()>,
    broadcaster: Mutex<Option<ThreadId>>,
}

impl NotificationHub {
    /// Create a hub monitoring `stock` with no observers.
    pub fn new(stock: Stock) -> Self {
        Self {
            symbol: stock.symbol().to_string(),
            stock: Mutex::new(stock),
            observers: Mutex::new(Vec::new()),
            update_lock: Mutex::new(()),
            broadcaster: Mutex::new(None),
        }
    }

    /// Symbol of the monitored stock.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Copy of the current stock state.
    pub fn stock(&self) -> Stock {
        lock(&self.stock).clone()
    }

    /// Apply a new price and broadcast the change.
    ///
    /// Returns `Ok(None)` when `new_price` equals the current price; no
    /// observer is called in that case. On error the stock is left unchanged
    /// and nothing is broadcast.
    pub fn update_price(&self, new_price: Decimal) -> Result<Option<BroadcastReport>, HubError> {
        let current = thread::current().id();
        if *lock(&self.broadcaster) == Some(current) {
            return Err(HubError::ReentrantUpdate {
                symbol: self.symbol.clone(),
            });
        }

        let _serial = lock(&self.update_lock);

        let (stock, change) = {
            let mut stock = lock(&self.stock);
            let new_price = validate_price(new_price)?;
            if new_price == stock.price() {
                debug!(symbol = %self.symbol, price = %new_price, "Price unchanged, skipping broadcast");
                return Ok(None);
            }

            let change = percent_change(&self.symbol, stock.price(), new_price)?;
            stock.update_price(new_price)?;
            (stock.clone(), change)
        };

        let _broadcasting = BroadcastGuard::enter(&self.broadcaster, current);
        Ok(Some(self.notify_all(&stock, change)))
    }
}

impl StockSubject for NotificationHub {
    fn subscribe(&self, observer: Arc<dyn StockObserver>) -> bool {
        let mut observers = lock(&self.observers);
        if observers.iter().any(|o| same_observer(o, &observer)) {
            debug!(symbol = %self.symbol, observer = observer.name(), "Observer already subscribed");
            return false;
        }

        debug!(symbol = %self.symbol, observer = observer.name(), "Observer subscribed");
        observers.push(observer);
        true
    }

    fn unsubscribe(&self, observer: &Arc<dyn StockObserver>) -> bool {
        let mut observers = lock(&self.observers);
        match observers.iter().position(|o| same_observer(o, observer)) {
            Some(index) => {
                observers.remove(index);
                debug!(symbol = %self.symbol, observer = observer.name(), "Observer unsubscribed");
                true
            }
            None => false,
        }
    }

    fn notify_all(&self, stock: &Stock, percent_change: Decimal) -> BroadcastReport {
        // Callbacks run without holding the list lock so they may (un)subscribe.
        let snapshot: Vec<Arc<dyn StockObserver>> = lock(&self.observers).clone();
        let mut report = BroadcastReport::new(stock, percent_change);

        info!(
            symbol = stock.symbol(),
            price = %stock.price(),
            change_pct = %percent_change.round_dp(2),
            observers = snapshot.len(),
            "Broadcasting price change"
        );

        for observer in &snapshot {
            match observer.on_change(stock, percent_change) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    warn!(
                        symbol = stock.symbol(),
                        observer = observer.name(),
                        error = %e,
                        "Observer failed to handle price change"
                    );
                    report.failures.push(DeliveryFailure {
                        observer: observer.name().to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        report
    }

    fn subscriber_count(&self) -> usize {
        lock(&self.observers).len()
    }
}

/// Marks the current thread as broadcasting until dropped.
struct BroadcastGuard<'a> {
    slot: &'a Mutex<Option<ThreadId>>,
}

impl<'a> BroadcastGuard<'a> {
    fn enter(slot: &'a Mutex<Option<ThreadId>>, thread: ThreadId) -> Self {
        *lock(slot) = Some(thread);
        Self { slot }
    }
}

impl Drop for BroadcastGuard<'_> {
    fn drop(&mut self) {
        *lock(self.slot) = None;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
