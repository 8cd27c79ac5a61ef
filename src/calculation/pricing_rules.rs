//! Rule-text driven fee calculation.
//!
//! Operators can describe their prices as short text such as
//! `"1 hour = $5, 2 hours = $8, more than 2 hours = $10"`. This module
//! parses a small, fixed grammar of such phrases and prices a stay from it
//! deterministically.
//!
//! # Grammar
//!
//! Clauses are separated by `,`, `;` or newlines and matched
//! case-insensitively. The `$` sign is optional and `hour`, `hours`, `hr`,
//! `hrs` and `h` are accepted as units.
//!
//! - `N hours = $X` (or `up to N hours = $X`): stays of up to `N` billable
//!   hours cost `X`.
//! - `more than N hours = $Y` (or `over N hours = $Y`): stays of more than
//!   `N` billable hours cost `Y`. At most one such clause.
//!
//! Billable hours are the stay duration rounded up to a whole hour.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{FeeCategory, FeeLine, FeeResult};

use super::tiered_fee::build_fee_result;

static TIER_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:up\s+to\s+)?(\d+(?:\.\d+)?)\s*(?:hours?|hrs?|h)\s*=\s*\$?\s*(\d+(?:\.\d+)?)$")
        .expect("tier clause regex")
});

static OVERFLOW_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:more\s+than|over)\s+(\d+(?:\.\d+)?)\s*(?:hours?|hrs?|h)\s*=\s*\$?\s*(\d+(?:\.\d+)?)$",
    )
    .expect("overflow clause regex")
});

/// A flat price for stays up to a number of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTier {
    /// Longest stay, in billable hours, covered by this tier.
    pub up_to_hours: Decimal,
    /// Flat price for the tier.
    pub price: Decimal,
}

/// A flat price for stays longer than a number of hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowRule {
    /// Stays strictly longer than this many billable hours match.
    pub after_hours: Decimal,
    /// Flat price for such stays.
    pub price: Decimal,
}

/// A parsed set of pricing rules.
///
/// # Example
///
/// ```
/// use parking_engine::calculation::PricingRules;
/// use rust_decimal::Decimal;
///
/// let rules = PricingRules::parse("1 hour = $5, 2 hours = $8, more than 2 hours = $10").unwrap();
/// assert_eq!(rules.tiers().len(), 2);
/// assert_eq!(rules.overflow().unwrap().price, Decimal::from(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    tiers: Vec<RuleTier>,
    overflow: Option<OverflowRule>,
}

impl PricingRules {
    /// Parses rule text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPricingRule` if the text holds no clauses, a clause
    /// does not match the grammar, two tiers share a threshold, more than one
    /// overflow clause is given, or the overflow threshold falls inside the
    /// range already covered by the tiers.
    pub fn parse(text: &str) -> EngineResult<Self> {
        let mut tiers: Vec<RuleTier> = Vec::new();
        let mut overflow: Option<OverflowRule> = None;

        let clauses = text
            .split([',', ';', '\n'])
            .map(str::trim)
            .filter(|clause| !clause.is_empty());

        for clause in clauses {
            let normalized = clause.to_lowercase();

            if let Some(caps) = OVERFLOW_CLAUSE.captures(&normalized) {
                let rule = OverflowRule {
                    after_hours: capture_decimal(&caps, 1, clause)?,
                    price: capture_decimal(&caps, 2, clause)?,
                };
                if overflow.replace(rule).is_some() {
                    return Err(invalid_rule("more than one 'more than' clause"));
                }
            } else if let Some(caps) = TIER_CLAUSE.captures(&normalized) {
                let tier = RuleTier {
                    up_to_hours: capture_decimal(&caps, 1, clause)?,
                    price: capture_decimal(&caps, 2, clause)?,
                };
                if tier.up_to_hours.is_zero() {
                    return Err(invalid_rule(format!("'{}' covers zero hours", clause)));
                }
                if tiers.iter().any(|t| t.up_to_hours == tier.up_to_hours) {
                    return Err(invalid_rule(format!(
                        "duplicate tier for {} hour(s)",
                        tier.up_to_hours.normalize()
                    )));
                }
                tiers.push(tier);
            } else {
                return Err(invalid_rule(format!("unrecognised clause '{}'", clause)));
            }
        }

        if tiers.is_empty() && overflow.is_none() {
            return Err(invalid_rule("no pricing clauses found"));
        }

        tiers.sort_by(|a, b| a.up_to_hours.cmp(&b.up_to_hours));

        if let (Some(rule), Some(longest)) = (&overflow, tiers.last()) {
            if rule.after_hours < longest.up_to_hours {
                return Err(invalid_rule(format!(
                    "'more than {} hours' overlaps the {} hour tier",
                    rule.after_hours.normalize(),
                    longest.up_to_hours.normalize()
                )));
            }
        }

        Ok(Self { tiers, overflow })
    }

    /// Returns the tiers, shortest first.
    pub fn tiers(&self) -> &[RuleTier] {
        &self.tiers
    }

    /// Returns the overflow clause, if any.
    pub fn overflow(&self) -> Option<&OverflowRule> {
        self.overflow.as_ref()
    }

    /// Prices a stay of `duration_hours` under these rules.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDuration` for a negative duration and
    /// `InvalidPricingRule` when no clause covers the billable hours.
    pub fn calculate(
        &self,
        duration_hours: Decimal,
        manual_adjustment: Option<Decimal>,
    ) -> EngineResult<FeeResult> {
        if duration_hours < Decimal::ZERO {
            return Err(EngineError::InvalidDuration {
                hours: duration_hours,
            });
        }

        let billable_hours = duration_hours.ceil();
        let mut lines = Vec::with_capacity(1);

        if billable_hours > Decimal::ZERO {
            lines.push(self.line_for(billable_hours)?);
        }

        build_fee_result(
            duration_hours,
            Decimal::ZERO,
            billable_hours,
            manual_adjustment,
            lines,
        )
    }

    fn line_for(&self, billable_hours: Decimal) -> EngineResult<FeeLine> {
        if let Some(tier) = self.tiers.iter().find(|t| t.up_to_hours >= billable_hours) {
            return Ok(FeeLine {
                category: FeeCategory::RuleTier,
                units: Decimal::ONE,
                rate: tier.price,
                amount: tier.price,
                description: format!(
                    "{} hour(s) billed at the {} hour rate of ${:.2}.",
                    billable_hours.normalize(),
                    tier.up_to_hours.normalize(),
                    tier.price
                ),
            });
        }

        match &self.overflow {
            Some(rule) if billable_hours > rule.after_hours => Ok(FeeLine {
                category: FeeCategory::RuleTier,
                units: Decimal::ONE,
                rate: rule.price,
                amount: rule.price,
                description: format!(
                    "{} hour(s) billed at the more than {} hours rate of ${:.2}.",
                    billable_hours.normalize(),
                    rule.after_hours.normalize(),
                    rule.price
                ),
            }),
            _ => Err(invalid_rule(format!(
                "no pricing rule covers {} hour(s)",
                billable_hours.normalize()
            ))),
        }
    }
}

/// Calculates a fee from free-text pricing rules.
///
/// # Examples
///
/// ```
/// use parking_engine::calculation::calculate_rule_fee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rules = "1 hour = $5, 2 hours = $8, more than 2 hours = $10";
/// let result = calculate_rule_fee(Decimal::from_str("1.5").unwrap(), rules, None).unwrap();
///
/// assert_eq!(result.calculated_fee, Decimal::from(8));
/// ```
pub fn calculate_rule_fee(
    duration_hours: Decimal,
    pricing_rules: &str,
    manual_adjustment: Option<Decimal>,
) -> EngineResult<FeeResult> {
    if duration_hours < Decimal::ZERO {
        return Err(EngineError::InvalidDuration {
            hours: duration_hours,
        });
    }
    PricingRules::parse(pricing_rules)?.calculate(duration_hours, manual_adjustment)
}

fn capture_decimal(caps: &Captures<'_>, index: usize, clause: &str) -> EngineResult<Decimal> {
    caps.get(index)
        .and_then(|m| Decimal::from_str(m.as_str()).ok())
        .ok_or_else(|| invalid_rule(format!("bad number in '{}'", clause)))
}

fn invalid_rule(message: impl Into<String>) -> EngineError {
    EngineError::InvalidPricingRule {
        message: message.into(),
    }
}
