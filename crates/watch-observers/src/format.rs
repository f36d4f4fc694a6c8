//! Message formatting helpers.

use rust_decimal::Decimal;

/// Format a price with two decimals.
pub fn format_price(price: Decimal) -> String {
    format!("{:.2}", price.round_dp(2))
}

/// Format a percentage with an explicit sign and two decimals, e.g. `+1.97`.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp(2);
    if rounded.is_zero() {
        return "+0.00".to_string();
    }

    if rounded.is_sign_negative() {
        format!("{:.2}", rounded)
    } else {
        format!("+{:.2}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec!(35.5)), "35.50");
        assert_eq!(format_price(dec!(36.204)), "36.20");
        assert_eq!(format_price(dec!(100)), "100.00");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(dec!(1.9718)), "+1.97");
        assert_eq!(format_percent(dec!(-6.6667)), "-6.67");
        assert_eq!(format_percent(dec!(10)), "+10.00");
        assert_eq!(format_percent(dec!(-0.001)), "+0.00");
    }
}
