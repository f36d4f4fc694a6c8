//! Messages emitted by observers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of message an observer produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Plain acknowledgement of a change
    Info,
    /// Threshold alert
    Alert,
    /// Push message to a device
    Push,
    /// Trade decision
    Trade,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationKind::Info => "info",
            NotificationKind::Alert => "alert",
            NotificationKind::Push => "push",
            NotificationKind::Trade => "trade",
        };
        write!(f, "{}", s)
    }
}

/// A message produced by an observer in response to a change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Name of the observer that produced the message
    pub source: String,
    /// Message kind
    pub kind: NotificationKind,
    /// Symbol the message is about
    pub symbol: String,
    /// Human-readable text
    pub message: String,
}

impl Notification {
    /// Create a new notification.
    pub fn new(
        source: impl Into<String>,
        kind: NotificationKind,
        symbol: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            kind,
            symbol: symbol.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.source, self.message)
    }
}
