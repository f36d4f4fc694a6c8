//! Percentage change computation.

use rust_decimal::Decimal;

use crate::error::HubError;

/// Percentage change from `old` to `new`: `(new - old) / old * 100`.
///
/// A zero `old` price is an error rather than an infinite change.
pub fn percent_change(symbol: &str, old: Decimal, new: Decimal) -> Result<Decimal, HubError> {
    if old.is_zero() {
        return Err(HubError::ZeroBasePrice {
            symbol: symbol.to_string(),
        });
    }

    new.checked_sub(old)
        .and_then(|delta| delta.checked_div(old))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| HubError::ChangeOverflow {
            symbol: symbol.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change("X", dec!(100), dec!(110)).unwrap(), dec!(10.00));
        assert_eq!(percent_change("X", dec!(100), dec!(90)).unwrap(), dec!(-10.00));
        assert_eq!(percent_change("X", dec!(100), dec!(100)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_percent_change_fractional() {
        let pct = percent_change("PETR4", dec!(35.50), dec!(36.20)).unwrap();
        assert!((pct - dec!(1.97)).abs() < dec!(0.01));

        let pct = percent_change("PETR4", dec!(37.50), dec!(35.00)).unwrap();
        assert!((pct - dec!(-6.67)).abs() < dec!(0.01));
    }

    #[test]
    fn test_percent_change_overflow() {
        let err = percent_change("TINY", dec!(0.0000000000000000000000000001), dec!(1)).unwrap_err();
        assert_eq!(
            err,
            HubError::ChangeOverflow {
                symbol: "TINY".to_string()
            }
        );
    }

    #[test]
    fn test_percent_change_zero_base() {
        let err = percent_change("CDB", Decimal::ZERO, dec!(50)).unwrap_err();
        assert_eq!(
            err,
            HubError::ZeroBasePrice {
                symbol: "CDB".to_string()
            }
        );
    }
}
