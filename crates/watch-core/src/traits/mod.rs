//! Core traits for the stock watch system.

mod feed;
mod observer;
mod sink;
mod subject;

pub use feed::PriceFeed;
pub use observer::{same_observer, ObserverConfig, StockObserver};
pub use sink::NotificationSink;
pub use subject::StockSubject;
