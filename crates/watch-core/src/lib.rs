//! Core types and traits for stock price notifications.
//!
//! This crate provides the foundational building blocks including:
//! - The monitored price entity (`Stock`) and change events
//! - Observer, subject, sink and price feed contracts
//! - Error types shared across the workspace

pub mod error;
pub mod traits;
pub mod types;

pub use error::{FeedError, HubError, ObserverError, PriceError};
pub use traits::*;
pub use types::*;
