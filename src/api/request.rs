//! Request types for the Parking Engine API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! fee, settings and slot endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::GarageSettings;
use crate::error::EngineResult;
use crate::models::{PaymentMethod, PricingPolicy, StayInterval};

/// Number of transactions returned when no `limit` is given.
pub const DEFAULT_TRANSACTION_LIMIT: usize = 100;

/// Request body for `POST /fees/calculate`.
///
/// Rates left out fall back to the garage's current settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeCalculationRequest {
    /// Elapsed hours to price.
    pub duration_hours: Decimal,
    /// Optional override for the hourly rate.
    #[serde(default)]
    pub price_per_hour: Option<Decimal>,
    /// Optional override for the daily rate.
    #[serde(default)]
    pub price_per_day: Option<Decimal>,
    /// Signed operator correction.
    #[serde(default)]
    pub manual_adjustment: Option<Decimal>,
}

impl FeeCalculationRequest {
    /// Builds the pricing policy, filling gaps from `defaults`.
    pub fn policy(&self, defaults: &GarageSettings) -> EngineResult<PricingPolicy> {
        PricingPolicy::new(
            self.price_per_hour.unwrap_or(defaults.price_per_hour),
            self.price_per_day.unwrap_or(defaults.price_per_day),
        )
    }
}

/// Request body for `POST /fees/stay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayFeeRequest {
    /// When the stay started.
    pub check_in_time: DateTime<Utc>,
    /// When the stay ended.
    pub check_out_time: DateTime<Utc>,
    /// Signed operator correction.
    #[serde(default)]
    pub manual_adjustment: Option<Decimal>,
}

impl StayFeeRequest {
    /// Returns the stay interval, rejecting a reversed one.
    pub fn stay(&self) -> EngineResult<StayInterval> {
        StayInterval::new(self.check_in_time, self.check_out_time)
    }
}

/// Request body for `POST /fees/rules`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleFeeRequest {
    /// Elapsed hours to price.
    pub duration_hours: Decimal,
    /// Rule text such as "1 hour = $5, more than 1 hour = $8".
    pub pricing_rules: String,
    /// Signed operator correction.
    #[serde(default)]
    pub manual_adjustment: Option<Decimal>,
}

/// Request body for `PUT /settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRequest {
    /// Number of parking slots.
    pub total_slots: u32,
    /// Price per started hour.
    pub price_per_hour: Decimal,
    /// Price per full day.
    pub price_per_day: Decimal,
}

impl From<SettingsRequest> for GarageSettings {
    fn from(req: SettingsRequest) -> Self {
        GarageSettings {
            total_slots: req.total_slots,
            price_per_hour: req.price_per_hour,
            price_per_day: req.price_per_day,
        }
    }
}

/// Request body for `POST /slots/:id/check-in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// The vehicle's plate as read at the gate.
    pub license_plate: String,
    /// Check-in instant; defaults to now.
    #[serde(default)]
    pub check_in_time: Option<DateTime<Utc>>,
}

/// Request body for `POST /slots/:id/check-out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutRequest {
    /// How the customer paid.
    pub payment_method: PaymentMethod,
    /// Signed operator correction.
    #[serde(default)]
    pub manual_adjustment: Option<Decimal>,
    /// Check-out instant; defaults to now.
    #[serde(default)]
    pub check_out_time: Option<DateTime<Utc>>,
}

/// Query string for `GET /slots/:id/quote`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteQuery {
    /// Signed operator correction.
    #[serde(default)]
    pub manual_adjustment: Option<Decimal>,
    /// Instant to price the stay up to; defaults to now.
    #[serde(default)]
    pub at: Option<DateTime<Utc>>,
}

/// Query string for `GET /transactions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionQuery {
    /// Partial plate to filter on.
    #[serde(default)]
    pub search: Option<String>,
    /// Maximum number of transactions to return.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl TransactionQuery {
    /// Returns the requested limit or [`DEFAULT_TRANSACTION_LIMIT`].
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_TRANSACTION_LIMIT)
    }
}
