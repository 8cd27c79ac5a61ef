//! Parking Engine
//!
//! This crate runs a single parking garage: it tracks which slots are
//! occupied, checks vehicles in and out, and prices each stay from an
//! hourly rate and a daily rate (or from a short pricing rule text), with
//! an optional manual adjustment by the operator.
//!
//! # Example
//!
//! ```
//! use parking_engine::calculation::calculate_fee;
//! use parking_engine::models::PricingPolicy;
//! use rust_decimal::Decimal;
//!
//! let policy = PricingPolicy::new(Decimal::from(10), Decimal::from(25)).unwrap();
//! let result = calculate_fee(Decimal::from(5), &policy, None).unwrap();
//!
//! // 5 hours at $10 would be $50, so the daily rate applies
//! assert_eq!(result.final_amount, Decimal::from(25));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod garage;
pub mod models;
