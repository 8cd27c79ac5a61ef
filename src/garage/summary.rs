//! Dashboard figures for the garage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Occupancy and revenue at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarageSummary {
    /// Number of slots in the garage.
    pub total_slots: u32,
    /// Slots currently holding a vehicle.
    pub occupied_slots: u32,
    /// Slots currently free.
    pub available_slots: u32,
    /// Completed transactions recorded.
    pub transaction_count: usize,
    /// Sum of all charged amounts.
    pub total_revenue: Decimal,
}
