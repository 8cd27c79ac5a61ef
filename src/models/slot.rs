//! Parking slot model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single parking space.
///
/// A slot is occupied exactly when it holds a license plate; the check-in
/// time is set alongside the plate.
///
/// # Example
///
/// ```
/// use parking_engine::models::ParkingSlot;
///
/// let slot = ParkingSlot::vacant(1);
/// assert!(!slot.is_occupied());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSlot {
    /// 1-based slot number.
    pub id: u32,
    /// Plate of the parked vehicle, if any.
    pub license_plate: Option<String>,
    /// When the parked vehicle checked in.
    pub check_in_time: Option<DateTime<Utc>>,
}

impl ParkingSlot {
    /// Creates an empty slot.
    pub fn vacant(id: u32) -> Self {
        Self {
            id,
            license_plate: None,
            check_in_time: None,
        }
    }

    /// Returns true when a vehicle is parked here.
    pub fn is_occupied(&self) -> bool {
        self.license_plate.is_some()
    }

    /// Parks a vehicle in the slot.
    pub(crate) fn occupy(&mut self, license_plate: String, at: DateTime<Utc>) {
        self.license_plate = Some(license_plate);
        self.check_in_time = Some(at);
    }

    /// Empties the slot.
    pub(crate) fn release(&mut self) {
        self.license_plate = None;
        self.check_in_time = None;
    }
}
