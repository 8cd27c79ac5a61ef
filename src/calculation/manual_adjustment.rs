//! Manual adjustment of a calculated fee.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Applies an operator's signed correction to a calculated fee.
///
/// The adjustment defaults to zero when absent. The result is floored at
/// zero: a discount can wipe out the fee but never turn it into a payout.
///
/// # Errors
///
/// Returns `AmountOverflow` when the sum leaves the decimal range.
///
/// # Examples
///
/// ```
/// use parking_engine::calculation::apply_manual_adjustment;
/// use rust_decimal::Decimal;
///
/// let fee = Decimal::from(5);
/// assert_eq!(apply_manual_adjustment(fee, Some(Decimal::from(-2))).unwrap(), Decimal::from(3));
/// assert_eq!(apply_manual_adjustment(fee, Some(Decimal::from(-8))).unwrap(), Decimal::ZERO);
/// assert_eq!(apply_manual_adjustment(fee, None).unwrap(), fee);
/// ```
pub fn apply_manual_adjustment(
    calculated_fee: Decimal,
    manual_adjustment: Option<Decimal>,
) -> EngineResult<Decimal> {
    let adjusted = calculated_fee
        .checked_add(manual_adjustment.unwrap_or_default())
        .ok_or_else(|| EngineError::amount_overflow("adjusted fee"))?;
    Ok(adjusted.max(Decimal::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn adjusted(fee: &str, adjustment: Option<&str>) -> Decimal {
        apply_manual_adjustment(dec(fee), adjustment.map(dec)).unwrap()
    }

    #[test]
    fn test_no_adjustment_keeps_fee() {
        assert_eq!(adjusted("12.50", None), dec("12.50"));
    }

    #[test]
    fn test_positive_adjustment_adds_surcharge() {
        assert_eq!(adjusted("10", Some("2.25")), dec("12.25"));
    }

    #[test]
    fn test_negative_adjustment_discounts() {
        assert_eq!(adjusted("5", Some("-2")), dec("3"));
    }

    #[test]
    fn test_discount_larger_than_fee_floors_at_zero() {
        assert_eq!(adjusted("5", Some("-100")), Decimal::ZERO);
    }

    #[test]
    fn test_adjustment_on_free_stay() {
        assert_eq!(adjusted("0", Some("3")), dec("3"));
    }

    #[test]
    fn test_surcharge_past_decimal_range_is_an_error() {
        let result = apply_manual_adjustment(dec("5"), Some(Decimal::MAX));

        match result {
            Err(EngineError::AmountOverflow { context }) => assert_eq!(context, "adjusted fee"),
            other => panic!("Expected AmountOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_discount_does_not_overflow() {
        assert_eq!(
            apply_manual_adjustment(Decimal::ZERO, Some(Decimal::MIN)).unwrap(),
            Decimal::ZERO
        );
    }
}
