//! A set of independent hubs keyed by symbol.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use watch_core::{
    error::HubError,
    traits::{StockObserver, StockSubject},
    types::{BroadcastReport, PriceTick, Stock},
};

use crate::NotificationHub;

/// Collection of monitored stocks, one hub per symbol.
#[derive(Default)]
pub struct Market {
    hubs: HashMap<String, Arc<NotificationHub>>,
    symbols: Vec<String>,
}

impl Market {
    /// Create an empty market.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start monitoring a stock.
    pub fn add_stock(&mut self, stock: Stock) -> Result<Arc<NotificationHub>, HubError> {
        let symbol = stock.symbol().to_string();
        if self.hubs.contains_key(&symbol) {
            return Err(HubError::DuplicateSymbol(symbol));
        }

        debug!(symbol = %symbol, price = %stock.price(), "Monitoring stock");
        let hub = Arc::new(NotificationHub::new(stock));
        self.hubs.insert(symbol.clone(), Arc::clone(&hub));
        self.symbols.push(symbol);
        Ok(hub)
    }

    /// Get the hub for a symbol.
    pub fn hub(&self, symbol: &str) -> Option<&Arc<NotificationHub>> {
        self.hubs.get(symbol)
    }

    /// Monitored symbols, in the order they were added.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Number of monitored stocks.
    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    /// Check if the market is empty.
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }

    /// Subscribe an observer to every hub. Returns how many hubs accepted it.
    pub fn subscribe_all(&self, observer: Arc<dyn StockObserver>) -> usize {
        self.iter_hubs()
            .filter(|hub| hub.subscribe(Arc::clone(&observer)))
            .count()
    }

    /// Remove an observer from every hub. Returns how many hubs dropped it.
    pub fn unsubscribe_all(&self, observer: &Arc<dyn StockObserver>) -> usize {
        self.iter_hubs()
            .filter(|hub| hub.unsubscribe(observer))
            .count()
    }

    /// Route a tick to the hub for its symbol.
    pub fn apply(&self, tick: &PriceTick) -> Result<Option<BroadcastReport>, HubError> {
        let hub = self
            .hub(&tick.symbol)
            .ok_or_else(|| HubError::UnknownSymbol(tick.symbol.clone()))?;
        hub.update_price(tick.price)
    }

    fn iter_hubs(&self) -> impl Iterator<Item = &Arc<NotificationHub>> {
        self.symbols.iter().filter_map(|s| self.hubs.get(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use watch_core::error::ObserverError;

    #[derive(Default)]
    struct Counter {
        calls: AtomicUsize,
    }

    impl StockObserver for Counter {
        fn name(&self) -> &str {
            "counter"
        }

        fn on_change(&self, _stock: &Stock, _percent_change: Decimal) -> Result<(), ObserverError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn market() -> Market {
        let mut market = Market::new();
        market
            .add_stock(Stock::new("PETR4", dec!(35.50), Utc::now()).unwrap())
            .unwrap();
        market
            .add_stock(Stock::new("VALE3", dec!(60), Utc::now()).unwrap())
            .unwrap();
        market
    }

    #[test]
    fn test_add_stock_rejects_duplicates() {
        let mut market = market();
        let result = market.add_stock(Stock::new("PETR4", dec!(1), Utc::now()).unwrap());

        assert!(matches!(result, Err(HubError::DuplicateSymbol(s)) if s == "PETR4"));
        assert_eq!(market.len(), 2);
        assert_eq!(market.symbols(), &["PETR4".to_string(), "VALE3".to_string()]);
    }

    #[test]
    fn test_hubs_are_independent() {
        let market = market();
        let counter = Arc::new(Counter::default());
        market.hub("PETR4").unwrap().subscribe(counter.clone());

        market.apply(&PriceTick::new("VALE3", dec!(61))).unwrap();
        assert_eq!(counter.calls.load(Ordering::SeqCst), 0);

        market.apply(&PriceTick::new("PETR4", dec!(36))).unwrap();
        assert_eq!(counter.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscribe_all() {
        let market = market();
        let counter: Arc<dyn StockObserver> = Arc::new(Counter::default());

        assert_eq!(market.subscribe_all(Arc::clone(&counter)), 2);
        assert_eq!(market.subscribe_all(Arc::clone(&counter)), 0);
        assert_eq!(market.unsubscribe_all(&counter), 2);
        assert_eq!(market.hub("VALE3").unwrap().subscriber_count(), 0);
    }

    #[test]
    fn test_apply_unknown_symbol() {
        let market = market();
        let err = market.apply(&PriceTick::new("XPTO", dec!(1))).unwrap_err();

        assert_eq!(err, HubError::UnknownSymbol("XPTO".to_string()));
    }
}
