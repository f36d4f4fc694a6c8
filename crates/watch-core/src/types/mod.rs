//! Core data types for the stock watch system.

mod change;
mod notification;
mod report;
mod stock;
mod tick;

pub use change::percent_change;
pub use notification::{Notification, NotificationKind};
pub use report::{BroadcastReport, DeliveryFailure};
pub use stock::{price_from_f64, validate_price, Stock};
pub use tick::PriceTick;
