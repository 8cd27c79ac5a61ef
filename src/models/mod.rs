//! Core data models for the Parking Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod fee_result;
mod pricing;
mod slot;
mod stay;
mod transaction;

pub use fee_result::{FeeCategory, FeeLine, FeeResult};
pub use pricing::PricingPolicy;
pub use slot::ParkingSlot;
pub use stay::StayInterval;
pub use transaction::{PaymentMethod, Transaction};
