//! Tiered hourly/daily fee calculation.
//!
//! This module prices a stay from the garage's hourly and daily rates.
//! Whole days are charged at the daily rate; the remaining time is charged
//! per started hour, capped at one daily rate.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{FeeCategory, FeeLine, FeeResult, PricingPolicy, StayInterval};

use super::apply_manual_adjustment;

/// Number of hours in one billable day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Calculates the fee for a stay of `duration_hours`.
///
/// # Algorithm
///
/// 1. `full_days = floor(duration_hours / 24)` and
///    `remaining_hours = ceil(duration_hours mod 24)`, so any started hour is
///    billed as a full hour.
/// 2. Full days are charged at `price_per_day`.
/// 3. The remaining hours are charged at `price_per_hour`, unless that would
///    exceed `price_per_day`, in which case the remainder costs exactly one
///    daily rate.
/// 4. The manual adjustment is applied and the result floored at zero.
///
/// A zero daily rate disables daily pricing altogether: every started hour
/// of the stay is charged at the hourly rate.
///
/// # Errors
///
/// Returns `InvalidDuration` for a negative duration and `InvalidRate` for
/// a negative rate. Inputs are never clamped. Returns `AmountOverflow` when
/// a charge or the adjusted total leaves the decimal range.
///
/// # Examples
///
/// ```
/// use parking_engine::calculation::calculate_fee;
/// use parking_engine::models::PricingPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PricingPolicy::new(Decimal::from(5), Decimal::from(25)).unwrap();
///
/// // 26 hours: one day plus 2 started hours
/// let result = calculate_fee(Decimal::from(26), &policy, None).unwrap();
/// assert_eq!(result.calculated_fee, Decimal::from(35));
/// assert_eq!(result.explanation, "1 day(s) at $25.00/day. 2 hour(s) at $5.00/hour.");
/// ```
pub fn calculate_fee(
    duration_hours: Decimal,
    policy: &PricingPolicy,
    manual_adjustment: Option<Decimal>,
) -> EngineResult<FeeResult> {
    if duration_hours < Decimal::ZERO {
        return Err(EngineError::InvalidDuration {
            hours: duration_hours,
        });
    }
    policy.validate()?;

    let (full_days, remaining_hours) = if policy.has_daily_rate() {
        // Split on the remainder so both halves agree at day boundaries.
        let remainder = duration_hours % HOURS_PER_DAY;
        (
            ((duration_hours - remainder) / HOURS_PER_DAY).floor(),
            remainder.ceil(),
        )
    } else {
        (Decimal::ZERO, duration_hours.ceil())
    };

    let mut lines = Vec::with_capacity(2);

    if full_days > Decimal::ZERO {
        lines.push(FeeLine {
            category: FeeCategory::FullDay,
            units: full_days,
            rate: policy.price_per_day,
            amount: full_days
                .checked_mul(policy.price_per_day)
                .ok_or_else(|| EngineError::amount_overflow("full-day charge"))?,
            description: format!(
                "{} day(s) at ${:.2}/day.",
                full_days.normalize(),
                policy.price_per_day
            ),
        });
    }

    // None means the hourly charge is past any representable daily rate.
    let hourly_cost = remaining_hours.checked_mul(policy.price_per_hour);

    if policy.has_daily_rate() && hourly_cost.is_none_or(|cost| cost > policy.price_per_day) {
        lines.push(FeeLine {
            category: FeeCategory::DailyCap,
            units: Decimal::ONE,
            rate: policy.price_per_day,
            amount: policy.price_per_day,
            description: format!(
                "Remaining time capped at daily rate of ${:.2}.",
                policy.price_per_day
            ),
        });
    } else if remaining_hours > Decimal::ZERO {
        lines.push(FeeLine {
            category: FeeCategory::Hourly,
            units: remaining_hours,
            rate: policy.price_per_hour,
            amount: hourly_cost.ok_or_else(|| EngineError::amount_overflow("hourly charge"))?,
            description: format!(
                "{} hour(s) at ${:.2}/hour.",
                remaining_hours.normalize(),
                policy.price_per_hour
            ),
        });
    }

    build_fee_result(
        duration_hours,
        full_days,
        remaining_hours,
        manual_adjustment,
        lines,
    )
}

/// Calculates the fee for a closed stay.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use parking_engine::calculation::calculate_stay_fee;
/// use parking_engine::models::{PricingPolicy, StayInterval};
/// use rust_decimal::Decimal;
///
/// let stay = StayInterval::new(
///     Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap(),
/// )
/// .unwrap();
/// let policy = PricingPolicy::new(Decimal::from(5), Decimal::from(25)).unwrap();
///
/// let result = calculate_stay_fee(&stay, &policy, Some(Decimal::from(-2))).unwrap();
/// assert_eq!(result.calculated_fee, Decimal::from(5));
/// assert_eq!(result.final_amount, Decimal::from(3));
/// ```
pub fn calculate_stay_fee(
    stay: &StayInterval,
    policy: &PricingPolicy,
    manual_adjustment: Option<Decimal>,
) -> EngineResult<FeeResult> {
    calculate_fee(stay.duration_hours(), policy, manual_adjustment)
}

/// Assembles a [`FeeResult`] from its line items.
pub(super) fn build_fee_result(
    duration_hours: Decimal,
    full_days: Decimal,
    remaining_hours: Decimal,
    manual_adjustment: Option<Decimal>,
    lines: Vec<FeeLine>,
) -> EngineResult<FeeResult> {
    let calculated_fee = lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.amount))
        .ok_or_else(|| EngineError::amount_overflow("calculated fee"))?;
    let explanation = lines
        .iter()
        .map(|line| line.description.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(FeeResult {
        duration_hours,
        full_days,
        remaining_hours,
        calculated_fee,
        manual_adjustment: manual_adjustment.unwrap_or_default(),
        final_amount: apply_manual_adjustment(calculated_fee, manual_adjustment)?,
        explanation,
        lines,
    })
}
