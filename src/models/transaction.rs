//! Transaction model.
//!
//! A [`Transaction`] records one completed stay: who parked where, for how
//! long, and what was paid.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Paid in cash at the gate.
    Cash,
    /// Paid by CliQ instant transfer.
    CliQ,
}

/// A completed, paid stay.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use parking_engine::models::{PaymentMethod, Transaction};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let transaction = Transaction {
///     id: Uuid::new_v4(),
///     license_plate: "ABC123".to_string(),
///     slot_id: 4,
///     check_in_time: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
///     check_out_time: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
///     duration_hours: Decimal::ONE,
///     calculated_fee: Decimal::from(5),
///     manual_adjustment: Decimal::ZERO,
///     amount: Decimal::from(5),
///     explanation: "1 hour(s) at $5.00/hour.".to_string(),
///     payment_method: PaymentMethod::Cash,
/// };
/// assert_eq!(transaction.amount, Decimal::from(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction.
    pub id: Uuid,
    /// The vehicle's plate.
    pub license_plate: String,
    /// The slot the vehicle occupied.
    pub slot_id: u32,
    /// When the stay started.
    pub check_in_time: DateTime<Utc>,
    /// When the stay ended.
    pub check_out_time: DateTime<Utc>,
    /// Elapsed hours of the stay.
    pub duration_hours: Decimal,
    /// Fee before manual adjustment.
    pub calculated_fee: Decimal,
    /// Operator correction applied to the fee.
    pub manual_adjustment: Decimal,
    /// Amount actually charged.
    pub amount: Decimal,
    /// Breakdown of the fee.
    pub explanation: String,
    /// How the amount was paid.
    pub payment_method: PaymentMethod,
}
