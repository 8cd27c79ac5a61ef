//! Calculation logic for the Parking Engine.
//!
//! This module contains the fee calculation functions: the tiered
//! hourly/daily calculator, the rule-text calculator, and the manual
//! adjustment shared by both. All functions are pure and safe to call
//! concurrently.

mod manual_adjustment;
mod pricing_rules;
mod tiered_fee;

pub use manual_adjustment::apply_manual_adjustment;
pub use pricing_rules::{OverflowRule, PricingRules, RuleTier, calculate_rule_fee};
pub use tiered_fee::{HOURS_PER_DAY, calculate_fee, calculate_stay_fee};
