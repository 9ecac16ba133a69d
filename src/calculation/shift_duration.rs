//! Shift duration calculation.
//!
//! A shift is described only by its start and end clock times, so an end
//! time that is not after the start time is read as the next day.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::ClockTime;

/// Number of minutes in a day, added to the end time of overnight shifts.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Calculates the length of a shift in whole minutes.
///
/// If the end time is earlier than the start time the shift crosses
/// midnight. Identical start and end times describe a full 24 hour shift.
pub fn shift_duration_minutes(start: ClockTime, end: ClockTime) -> u32 {
    let start_minutes = start.minutes_since_midnight();
    let mut end_minutes = end.minutes_since_midnight();

    if end_minutes <= start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }

    end_minutes - start_minutes
}

/// Calculates the length of a shift in hours.
///
/// # Examples
///
/// ```
/// use shift_roster::calculation::shift_duration;
/// use shift_roster::models::ClockTime;
/// use rust_decimal::Decimal;
///
/// let start = ClockTime::parse("0900").unwrap();
/// let end = ClockTime::parse("1330").unwrap();
/// assert_eq!(shift_duration(start, end), Decimal::new(45, 1)); // 4.5
///
/// // Overnight
/// let start = ClockTime::parse("2200").unwrap();
/// let end = ClockTime::parse("0600").unwrap();
/// assert_eq!(shift_duration(start, end), Decimal::new(8, 0));
/// ```
pub fn shift_duration(start: ClockTime, end: ClockTime) -> Decimal {
    Decimal::from(shift_duration_minutes(start, end)) / Decimal::from(60)
}

/// Parses two `HHMM` strings and calculates the shift length in hours.
///
/// Returns [`EngineError::InvalidTime`](crate::error::EngineError::InvalidTime)
/// if either string is not a valid clock time.
///
/// # Examples
///
/// ```
/// use shift_roster::calculation::compute_shift_duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_shift_duration("0900", "0900").unwrap(), Decimal::new(24, 0));
/// assert!(compute_shift_duration("9am", "1700").is_err());
/// ```
pub fn compute_shift_duration(start_time: &str, end_time: &str) -> EngineResult<Decimal> {
    let start = ClockTime::parse(start_time)?;
    let end = ClockTime::parse(end_time)?;
    Ok(shift_duration(start, end))
}
