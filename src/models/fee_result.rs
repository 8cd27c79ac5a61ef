//! Fee result models for the Parking Engine.
//!
//! This module contains the [`FeeResult`] type and its line items. A fee
//! result is computed on demand at check-out and folded into a
//! [`Transaction`](super::Transaction); it is never stored on its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The category of charge for a fee line.
///
/// # Example
///
/// ```
/// use parking_engine::models::FeeCategory;
///
/// let category = FeeCategory::DailyCap;
/// assert_eq!(serde_json::to_string(&category).unwrap(), "\"daily_cap\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeCategory {
    /// Whole 24-hour days charged at the daily rate.
    FullDay,
    /// Remaining started hours charged at the hourly rate.
    Hourly,
    /// Remaining hours whose hourly cost exceeded the daily rate.
    DailyCap,
    /// A flat tier selected from a pricing rule text.
    RuleTier,
}

/// A single itemised charge within a fee.
///
/// # Example
///
/// ```
/// use parking_engine::models::{FeeCategory, FeeLine};
/// use rust_decimal::Decimal;
///
/// let line = FeeLine {
///     category: FeeCategory::Hourly,
///     units: Decimal::from(2),
///     rate: Decimal::from(5),
///     amount: Decimal::from(10),
///     description: "2 hour(s) at $5.00/hour.".to_string(),
/// };
/// assert_eq!(line.units * line.rate, line.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeLine {
    /// What kind of charge this is.
    pub category: FeeCategory,
    /// Days, hours, or 1 for flat charges.
    pub units: Decimal,
    /// The price per unit.
    pub rate: Decimal,
    /// The amount charged by this line.
    pub amount: Decimal,
    /// Human-readable sentence for this line.
    pub description: String,
}

/// The outcome of pricing a stay.
///
/// `calculated_fee` is the base fee before the operator's manual
/// adjustment; `final_amount` is what the customer pays and is never
/// negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeResult {
    /// The priced duration in hours.
    pub duration_hours: Decimal,
    /// Whole days charged at the daily rate.
    pub full_days: Decimal,
    /// Started hours left after the whole days.
    pub remaining_hours: Decimal,
    /// The fee before manual adjustment.
    pub calculated_fee: Decimal,
    /// The signed operator correction (zero when none was given).
    pub manual_adjustment: Decimal,
    /// `max(0, calculated_fee + manual_adjustment)`.
    pub final_amount: Decimal,
    /// Breakdown text; empty for a zero-length stay.
    pub explanation: String,
    /// Itemised charges summing to `calculated_fee`.
    pub lines: Vec<FeeLine>,
}

impl FeeResult {
    /// Sums the line amounts; `None` if the sum leaves the decimal range.
    pub fn lines_total(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.amount))
    }
}
