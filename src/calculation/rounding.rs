//! Currency rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept on every monetary amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a monetary amount to whole cents, ties away from zero.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("1.495").unwrap()), Decimal::from_str("1.50").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("0.398").unwrap()), Decimal::from_str("0.40").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("1.1175").unwrap()), Decimal::from_str("1.12").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_up() {
        assert_eq!(round_currency(dec("1.495")), dec("1.50"));
        assert_eq!(round_currency(dec("0.005")), dec("0.01"));
        assert_eq!(round_currency(dec("2.125")), dec("2.13"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round_currency(dec("1.4949")), dec("1.49"));
        assert_eq!(round_currency(dec("0.004")), dec("0.00"));
    }

    #[test]
    fn test_above_midpoint_rounds_up() {
        assert_eq!(round_currency(dec("1.1175")), dec("1.12"));
        assert_eq!(round_currency(dec("0.398")), dec("0.40"));
    }

    #[test]
    fn test_whole_cents_unchanged() {
        assert_eq!(round_currency(dec("8.97")), dec("8.97"));
        assert_eq!(round_currency(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_result_never_has_more_than_two_places() {
        assert_eq!(round_currency(dec("14.950000")).scale(), 2);
        assert!(round_currency(dec("3.14159")).scale() <= CURRENCY_SCALE);
    }
}
