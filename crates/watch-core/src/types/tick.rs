//! Price ticks fed into the system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A new price observation for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTick {
    /// Symbol
    pub symbol: String,
    /// Observed price
    pub price: Decimal,
}

impl PriceTick {
    /// Create a new tick.
    pub fn new(symbol: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price,
        }
    }
}
