//! Pricing policy model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The hourly/daily rate pair governing fee computation.
///
/// # Example
///
/// ```
/// use parking_engine::models::PricingPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PricingPolicy::new(Decimal::from(5), Decimal::from(25)).unwrap();
/// assert!(policy.has_daily_rate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Price charged per started hour.
    pub price_per_hour: Decimal,
    /// Price charged per full day; zero disables daily pricing.
    pub price_per_day: Decimal,
}

impl PricingPolicy {
    /// Creates a validated pricing policy.
    pub fn new(price_per_hour: Decimal, price_per_day: Decimal) -> EngineResult<Self> {
        let policy = Self {
            price_per_hour,
            price_per_day,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Rejects negative rates.
    pub fn validate(&self) -> EngineResult<()> {
        if self.price_per_hour < Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                field: "price_per_hour".to_string(),
                value: self.price_per_hour,
            });
        }
        if self.price_per_day < Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                field: "price_per_day".to_string(),
                value: self.price_per_day,
            });
        }
        Ok(())
    }

    /// Returns true when a daily rate applies.
    pub fn has_daily_rate(&self) -> bool {
        self.price_per_day > Decimal::ZERO
    }
}
