//! The in-memory garage: slot table and transaction log.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::calculation::calculate_stay_fee;
use crate::config::GarageSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{FeeResult, ParkingSlot, PaymentMethod, StayInterval, Transaction};

use super::GarageSummary;

/// Slot occupancy, completed transactions, and the settings that price them.
///
/// Transactions are kept newest first.
///
/// # Example
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use parking_engine::config::GarageSettings;
/// use parking_engine::garage::Garage;
/// use parking_engine::models::PaymentMethod;
/// use rust_decimal::Decimal;
///
/// let mut garage = Garage::new(GarageSettings::default()).unwrap();
/// let check_in = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
///
/// garage.check_in(1, "abc 123", check_in).unwrap();
/// let transaction = garage
///     .check_out(1, check_in + Duration::hours(2), None, PaymentMethod::Cash)
///     .unwrap();
///
/// assert_eq!(transaction.license_plate, "ABC 123");
/// assert_eq!(transaction.amount, Decimal::from(10));
/// assert!(!garage.slot(1).unwrap().is_occupied());
/// ```
#[derive(Debug, Clone)]
pub struct Garage {
    settings: GarageSettings,
    slots: Vec<ParkingSlot>,
    transactions: Vec<Transaction>,
}

impl Garage {
    /// Creates a garage with `settings.total_slots` vacant slots.
    pub fn new(settings: GarageSettings) -> EngineResult<Self> {
        settings.validate()?;

        Ok(Self {
            settings,
            slots: (1..=settings.total_slots).map(ParkingSlot::vacant).collect(),
            transactions: Vec::new(),
        })
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &GarageSettings {
        &self.settings
    }

    /// Returns all slots in id order.
    pub fn slots(&self) -> &[ParkingSlot] {
        &self.slots
    }

    /// Looks up a slot by id.
    pub fn slot(&self, slot_id: u32) -> EngineResult<&ParkingSlot> {
        slot_index(slot_id)
            .and_then(|index| self.slots.get(index))
            .ok_or(EngineError::SlotNotFound { slot_id })
    }

    fn slot_mut(&mut self, slot_id: u32) -> EngineResult<&mut ParkingSlot> {
        slot_index(slot_id)
            .and_then(|index| self.slots.get_mut(index))
            .ok_or(EngineError::SlotNotFound { slot_id })
    }

    /// Parks a vehicle in a vacant slot.
    ///
    /// The plate is trimmed and uppercased before it is stored.
    ///
    /// # Errors
    ///
    /// - `InvalidLicensePlate` if the plate is blank
    /// - `SlotNotFound` if the slot does not exist
    /// - `SlotOccupied` if the slot already holds a vehicle
    /// - `VehicleAlreadyParked` if the plate is parked in another slot
    pub fn check_in(
        &mut self,
        slot_id: u32,
        license_plate: &str,
        at: DateTime<Utc>,
    ) -> EngineResult<&ParkingSlot> {
        let plate = normalize_plate(license_plate)?;

        if let Some(existing) = self.occupied_by(&plate) {
            return Err(EngineError::VehicleAlreadyParked {
                license_plate: plate,
                slot_id: existing.id,
            });
        }

        let slot = self.slot_mut(slot_id)?;
        if let Some(current) = &slot.license_plate {
            return Err(EngineError::SlotOccupied {
                slot_id,
                license_plate: current.clone(),
            });
        }

        slot.occupy(plate, at);
        debug!(slot_id, license_plate = ?slot.license_plate, "Vehicle checked in");
        Ok(&*slot)
    }

    /// Prices the current stay in an occupied slot without ending it.
    pub fn quote(
        &self,
        slot_id: u32,
        now: DateTime<Utc>,
        manual_adjustment: Option<Decimal>,
    ) -> EngineResult<FeeResult> {
        let slot = self.slot(slot_id)?;
        let stay = open_stay(slot, now)?;
        calculate_stay_fee(&stay, &self.settings.pricing_policy(), manual_adjustment)
    }

    /// Ends the stay in an occupied slot and records the payment.
    ///
    /// # Errors
    ///
    /// - `SlotNotFound` / `SlotVacant` if there is no stay to end
    /// - `InvalidStay` if `at` is earlier than the check-in
    pub fn check_out(
        &mut self,
        slot_id: u32,
        at: DateTime<Utc>,
        manual_adjustment: Option<Decimal>,
        payment_method: PaymentMethod,
    ) -> EngineResult<Transaction> {
        let policy = self.settings.pricing_policy();
        let slot = self.slot_mut(slot_id)?;
        let stay = open_stay(slot, at)?;
        let fee = calculate_stay_fee(&stay, &policy, manual_adjustment)?;

        let license_plate = slot.license_plate.clone().unwrap_or_default();
        slot.release();

        let transaction = Transaction {
            id: Uuid::new_v4(),
            license_plate,
            slot_id,
            check_in_time: stay.check_in(),
            check_out_time: stay.check_out(),
            duration_hours: fee.duration_hours,
            calculated_fee: fee.calculated_fee,
            manual_adjustment: fee.manual_adjustment,
            amount: fee.final_amount,
            explanation: fee.explanation,
            payment_method,
        };

        debug!(
            slot_id,
            transaction_id = %transaction.id,
            amount = %transaction.amount,
            "Vehicle checked out"
        );

        self.transactions.insert(0, transaction.clone());
        Ok(transaction)
    }

    /// Finds the slot holding a plate (case-insensitive exact match).
    pub fn find_vehicle(&self, license_plate: &str) -> EngineResult<&ParkingSlot> {
        let plate = normalize_plate(license_plate)?;
        self.occupied_by(&plate)
            .ok_or(EngineError::VehicleNotFound {
                license_plate: plate,
            })
    }

    fn occupied_by(&self, plate: &str) -> Option<&ParkingSlot> {
        self.slots
            .iter()
            .find(|slot| slot.license_plate.as_deref() == Some(plate))
    }

    /// Returns every transaction, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns at most `limit` of the newest transactions.
    pub fn recent_transactions(&self, limit: usize) -> &[Transaction] {
        &self.transactions[..limit.min(self.transactions.len())]
    }

    /// Returns transactions whose plate contains `term`, ignoring case.
    pub fn search_transactions(&self, term: &str) -> Vec<&Transaction> {
        let needle = term.trim().to_uppercase();
        self.transactions
            .iter()
            .filter(|t| t.license_plate.to_uppercase().contains(&needle))
            .collect()
    }

    /// Summarises occupancy and revenue.
    ///
    /// Fails with `AmountOverflow` if the revenue total leaves the decimal range.
    pub fn summary(&self) -> EngineResult<GarageSummary> {
        let occupied_slots = self.slots.iter().filter(|s| s.is_occupied()).count() as u32;
        let total_slots = self.slots.len() as u32;
        let total_revenue = self
            .transactions
            .iter()
            .try_fold(Decimal::ZERO, |total, t| total.checked_add(t.amount))
            .ok_or_else(|| EngineError::amount_overflow("total revenue"))?;

        Ok(GarageSummary {
            total_slots,
            occupied_slots,
            available_slots: total_slots - occupied_slots,
            transaction_count: self.transactions.len(),
            total_revenue,
        })
    }

    /// Replaces the settings and resizes the slot table.
    ///
    /// Shrinking removes the highest-numbered slots, which must be vacant.
    pub fn update_settings(&mut self, settings: GarageSettings) -> EngineResult<()> {
        settings.validate()?;

        let new_len = settings.total_slots as usize;
        if let Some(blocking) = self.slots.iter().skip(new_len).find(|s| s.is_occupied()) {
            return Err(EngineError::SlotOccupied {
                slot_id: blocking.id,
                license_plate: blocking.license_plate.clone().unwrap_or_default(),
            });
        }

        self.slots.truncate(new_len);
        let first_new = self.slots.len() as u32 + 1;
        self.slots
            .extend((first_new..=settings.total_slots).map(ParkingSlot::vacant));
        self.settings = settings;

        debug!(total_slots = settings.total_slots, "Garage settings updated");
        Ok(())
    }
}

fn slot_index(slot_id: u32) -> Option<usize> {
    (slot_id as usize).checked_sub(1)
}

fn normalize_plate(license_plate: &str) -> EngineResult<String> {
    let plate = license_plate.trim().to_uppercase();
    if plate.is_empty() {
        return Err(EngineError::InvalidLicensePlate {
            message: "license plate must not be empty".to_string(),
        });
    }
    Ok(plate)
}

fn open_stay(slot: &ParkingSlot, now: DateTime<Utc>) -> EngineResult<StayInterval> {
    match slot.check_in_time {
        Some(check_in) if slot.is_occupied() => StayInterval::until_now(check_in, now),
        _ => Err(EngineError::SlotVacant { slot_id: slot.id }),
    }
}
