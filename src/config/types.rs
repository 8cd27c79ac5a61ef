//! Configuration types for the garage.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::PricingPolicy;

/// Default number of parking slots.
pub const DEFAULT_TOTAL_SLOTS: u32 = 30;

/// Largest number of parking slots a garage may be configured with.
pub const MAX_TOTAL_SLOTS: u32 = 10_000;

/// Metadata about the garage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarageMetadata {
    /// Short identifier for the garage (e.g., "downtown").
    pub code: String,
    /// The human-readable name of the garage.
    pub name: String,
    /// Currency code prices are expressed in (e.g., "JOD").
    pub currency: String,
}

/// Operator settings: capacity and prices.
///
/// # Example
///
/// ```
/// use parking_engine::config::GarageSettings;
/// use rust_decimal::Decimal;
///
/// let settings = GarageSettings::default();
/// assert_eq!(settings.total_slots, 30);
/// assert_eq!(settings.price_per_hour, Decimal::from(5));
/// assert_eq!(settings.price_per_day, Decimal::from(25));
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageSettings {
    /// Number of parking slots; between one and [`MAX_TOTAL_SLOTS`].
    pub total_slots: u32,
    /// Price per started hour.
    pub price_per_hour: Decimal,
    /// Price per full day; zero disables daily pricing.
    pub price_per_day: Decimal,
}

impl Default for GarageSettings {
    fn default() -> Self {
        Self {
            total_slots: DEFAULT_TOTAL_SLOTS,
            price_per_hour: Decimal::from(5),
            price_per_day: Decimal::from(25),
        }
    }
}

impl GarageSettings {
    /// Checks capacity and price invariants.
    pub fn validate(&self) -> EngineResult<()> {
        if self.total_slots < 1 {
            return Err(EngineError::InvalidSettings {
                field: "total_slots".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.total_slots > MAX_TOTAL_SLOTS {
            return Err(EngineError::InvalidSettings {
                field: "total_slots".to_string(),
                message: format!("must be at most {}", MAX_TOTAL_SLOTS),
            });
        }
        self.pricing_policy().validate()
    }

    /// Returns the pricing policy these settings describe.
    pub fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy {
            price_per_hour: self.price_per_hour,
            price_per_day: self.price_per_day,
        }
    }
}

/// The complete garage configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct GarageConfig {
    metadata: GarageMetadata,
    settings: GarageSettings,
}

impl GarageConfig {
    /// Creates a new GarageConfig from its component parts.
    pub fn new(metadata: GarageMetadata, settings: GarageSettings) -> Self {
        Self { metadata, settings }
    }

    /// Returns the garage metadata.
    pub fn garage(&self) -> &GarageMetadata {
        &self.metadata
    }

    /// Returns the default settings.
    pub fn settings(&self) -> &GarageSettings {
        &self.settings
    }
}
