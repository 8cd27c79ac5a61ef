//! Stay interval model.
//!
//! A [`StayInterval`] is the span between a vehicle's check-in and its
//! check-out (or "now" for a vehicle that is still parked).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// The span of a single vehicle stay.
///
/// Deserialization goes through [`StayInterval::new`], so a reversed stay
/// is rejected there too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StayTimes")]
pub struct StayInterval {
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

#[derive(Deserialize)]
struct StayTimes {
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

impl TryFrom<StayTimes> for StayInterval {
    type Error = EngineError;

    fn try_from(times: StayTimes) -> EngineResult<Self> {
        Self::new(times.check_in, times.check_out)
    }
}

impl StayInterval {
    /// Creates a stay, rejecting a check-out earlier than the check-in.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use parking_engine::models::StayInterval;
    /// use rust_decimal::Decimal;
    ///
    /// let check_in = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
    /// let check_out = Utc.with_ymd_and_hms(2026, 1, 15, 11, 30, 0).unwrap();
    ///
    /// let stay = StayInterval::new(check_in, check_out).unwrap();
    /// assert_eq!(stay.duration_hours(), Decimal::new(25, 1)); // 2.5 hours
    /// ```
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> EngineResult<Self> {
        if check_out < check_in {
            return Err(EngineError::InvalidStay {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Closes an open stay against the caller's notion of "now".
    pub fn until_now(check_in: DateTime<Utc>, now: DateTime<Utc>) -> EngineResult<Self> {
        Self::new(check_in, now)
    }

    /// Returns the check-in instant.
    pub fn check_in(&self) -> DateTime<Utc> {
        self.check_in
    }

    /// Returns the check-out instant.
    pub fn check_out(&self) -> DateTime<Utc> {
        self.check_out
    }

    /// Returns the elapsed wall-clock hours of the stay.
    ///
    /// Millisecond precision; never negative.
    pub fn duration_hours(&self) -> Decimal {
        let millis = (self.check_out - self.check_in).num_milliseconds();
        Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)
    }
}
