//! Notification sink trait.

use crate::error::ObserverError;
use crate::types::Notification;

/// Destination for messages produced by observers.
pub trait NotificationSink: Send + Sync {
    /// Deliver a message.
    fn deliver(&self, notification: &Notification) -> Result<(), ObserverError>;
}
