//! Error types for the Parking Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while pricing stays and
//! managing the garage.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Parking Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use parking_engine::error::EngineError;
///
/// let error = EngineError::SlotNotFound { slot_id: 42 };
/// assert_eq!(error.to_string(), "Parking slot not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A stay duration was negative.
    #[error("Invalid duration: {hours} hours (must be zero or greater)")]
    InvalidDuration {
        /// The rejected duration in hours.
        hours: Decimal,
    },

    /// A pricing rate was negative.
    #[error("Invalid rate '{field}': {value} (must be zero or greater)")]
    InvalidRate {
        /// The rate that was rejected (e.g. "price_per_hour").
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// A stay ended before it started.
    #[error("Invalid stay: check-out {check_out} is before check-in {check_in}")]
    InvalidStay {
        /// The check-in instant.
        check_in: DateTime<Utc>,
        /// The check-out instant.
        check_out: DateTime<Utc>,
    },

    /// A pricing rule text could not be interpreted.
    #[error("Invalid pricing rule: {message}")]
    InvalidPricingRule {
        /// A description of what made the rule invalid.
        message: String,
    },

    /// A license plate was empty after trimming.
    #[error("Invalid license plate: {message}")]
    InvalidLicensePlate {
        /// A description of what made the plate invalid.
        message: String,
    },

    /// Garage settings violated their invariants.
    #[error("Invalid settings field '{field}': {message}")]
    InvalidSettings {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A charge, total or adjusted amount exceeded the decimal range.
    #[error("Amount overflow while computing the {context}")]
    AmountOverflow {
        /// The amount being computed (e.g. "full-day charge").
        context: String,
    },

    /// No slot exists with the given id.
    #[error("Parking slot not found: {slot_id}")]
    SlotNotFound {
        /// The requested slot id.
        slot_id: u32,
    },

    /// The slot already holds a vehicle.
    #[error("Parking slot {slot_id} is occupied by {license_plate}")]
    SlotOccupied {
        /// The occupied slot id.
        slot_id: u32,
        /// The plate of the vehicle in the slot.
        license_plate: String,
    },

    /// The slot holds no vehicle.
    #[error("Parking slot {slot_id} is vacant")]
    SlotVacant {
        /// The vacant slot id.
        slot_id: u32,
    },

    /// The vehicle is already checked in elsewhere.
    #[error("Vehicle {license_plate} is already parked in slot {slot_id}")]
    VehicleAlreadyParked {
        /// The plate of the vehicle.
        license_plate: String,
        /// The slot currently holding it.
        slot_id: u32,
    },

    /// No parked vehicle carries the given plate.
    #[error("Vehicle not found: {license_plate}")]
    VehicleNotFound {
        /// The plate that was searched for.
        license_plate: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by invalid caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidDuration { .. }
                | EngineError::InvalidRate { .. }
                | EngineError::InvalidStay { .. }
                | EngineError::InvalidPricingRule { .. }
                | EngineError::InvalidLicensePlate { .. }
                | EngineError::InvalidSettings { .. }
        )
    }
}

impl EngineError {
    pub(crate) fn amount_overflow(context: &str) -> Self {
        EngineError::AmountOverflow {
            context: context.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
