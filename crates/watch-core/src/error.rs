//! Error types for the stock watch system.

use rust_decimal::Decimal;
use thiserror::Error;

/// Invalid price input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PriceError {
    #[error("Price must not be negative: {0}")]
    Negative(Decimal),

    #[error("Price must be finite: {0}")]
    NonFinite(f64),

    #[error("Price out of representable range: {0}")]
    OutOfRange(f64),

    #[error("Symbol must not be empty")]
    EmptySymbol,
}

/// Errors raised while updating a hub or broadcasting a change.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HubError {
    #[error("Cannot compute change for {symbol}: previous price is zero")]
    ZeroBasePrice { symbol: String },

    #[error("Change for {symbol} is too large to represent")]
    ChangeOverflow { symbol: String },

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error("Re-entrant price update on {symbol} during its own broadcast")]
    ReentrantUpdate { symbol: String },

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Symbol already monitored: {0}")]
    DuplicateSymbol(String),
}

/// Observer-specific errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObserverError {
    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Observer kind not found: {0}")]
    NotFound(String),
}

/// Price feed errors.
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("No data available")]
    NoDataAvailable,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid price in feed: {0}")]
    InvalidPrice(#[from] PriceError),
}

