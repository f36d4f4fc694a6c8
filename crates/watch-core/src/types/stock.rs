//! The monitored price entity.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::PriceError;

/// A stock whose price is being monitored.
///
/// The symbol is fixed at construction. The price and timestamp only change
/// through [`Stock::update_price`], and the timestamp never moves backward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stock {
    symbol: String,
    price: Decimal,
    last_update: DateTime<Utc>,
}

impl Stock {
    /// Create a new stock with an initial price and timestamp.
    pub fn new(
        symbol: impl Into<String>,
        price: Decimal,
        last_update: DateTime<Utc>,
    ) -> Result<Self, PriceError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(PriceError::EmptySymbol);
        }

        Ok(Self {
            symbol,
            price: validate_price(price)?,
            last_update,
        })
    }

    /// Ticker symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Current price.
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Time of the last price change.
    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    /// Set a new price, stamping the change with the current time.
    ///
    /// Returns `Ok(true)` if the price changed and `Ok(false)` if `new_price`
    /// equals the current price exactly. Invalid prices leave the stock untouched.
    pub fn update_price(&mut self, new_price: Decimal) -> Result<bool, PriceError> {
        self.update_price_at(new_price, Utc::now())
    }

    /// Same as [`Stock::update_price`] with an explicit clock reading.
    pub fn update_price_at(
        &mut self,
        new_price: Decimal,
        now: DateTime<Utc>,
    ) -> Result<bool, PriceError> {
        let new_price = validate_price(new_price)?;
        if new_price == self.price {
            return Ok(false);
        }

        self.price = new_price;
        self.last_update = self.last_update.max(now);
        Ok(true)
    }
}

/// Check that a price is usable (non-negative).
pub fn validate_price(price: Decimal) -> Result<Decimal, PriceError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(PriceError::Negative(price));
    }
    Ok(price)
}

/// Convert a floating point price into a `Decimal`.
///
/// NaN and infinities are rejected rather than clamped.
pub fn price_from_f64(value: f64) -> Result<Decimal, PriceError> {
    if !value.is_finite() {
        return Err(PriceError::NonFinite(value));
    }
    let price = Decimal::try_from(value).map_err(|_| PriceError::OutOfRange(value))?;
    validate_price(price)
}
