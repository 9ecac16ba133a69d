//! Shift model.
//!
//! Shifts are reference data: they are loaded from the record store and
//! never created or changed by the roster itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{shift_duration, shift_duration_minutes};

use super::ClockTime;

/// Represents a scheduled block of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Unique identifier for the shift.
    pub shift_id: String,
    /// The calendar day the shift starts on.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: ClockTime,
    /// The end time of the shift. Earlier than `start_time` means the shift
    /// runs past midnight.
    pub end_time: ClockTime,
}

impl Shift {
    /// Returns the length of the shift in hours.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::{ClockTime, Shift};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     shift_id: "S1".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     start_time: ClockTime::parse("2200").unwrap(),
    ///     end_time: ClockTime::parse("0600").unwrap(),
    /// };
    /// assert_eq!(shift.duration_hours(), Decimal::new(8, 0));
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        shift_duration(self.start_time, self.end_time)
    }

    /// Returns the length of the shift in whole minutes.
    pub fn duration_minutes(&self) -> u32 {
        shift_duration_minutes(self.start_time, self.end_time)
    }
}
