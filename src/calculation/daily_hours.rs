//! Daily hours cap check.
//!
//! Totals the hours an employee already works on a candidate shift's date,
//! adds the candidate shift, and compares the result to the daily cap.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// The outcome of checking a candidate shift against the daily hours cap.
///
/// # Example
///
/// ```
/// use shift_roster::calculation::check_daily_hours;
/// use shift_roster::models::{ClockTime, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let shift = |id: &str, start: &str, end: &str| Shift {
///     shift_id: id.to_string(),
///     date,
///     start_time: ClockTime::parse(start).unwrap(),
///     end_time: ClockTime::parse(end).unwrap(),
/// };
///
/// let existing = vec![shift("S1", "0800", "1300")];
/// let check = check_daily_hours(&existing, &shift("S2", "1400", "1700"), Decimal::new(8, 0));
/// assert!(check.within_limit);
/// assert_eq!(check.total_hours, Decimal::new(8, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHoursCheck {
    /// The date being checked (the candidate shift's date).
    pub date: NaiveDate,
    /// Minutes already assigned on that date.
    pub existing_minutes: u32,
    /// Minutes the candidate shift would add.
    pub candidate_minutes: u32,
    /// Total hours on that date if the candidate were accepted.
    pub total_hours: Decimal,
    /// The configured cap.
    pub max_daily_hours: Decimal,
    /// True when the total does not exceed the cap.
    pub within_limit: bool,
}

/// Checks whether adding `candidate` keeps the employee within the cap.
///
/// `assigned` holds the shifts already assigned to the employee; only those
/// on the candidate's date are counted. An overnight shift counts in full
/// toward the date it starts on. Reaching the cap exactly is allowed, and a
/// cap too large to convert to minutes never rejects.
pub fn check_daily_hours<'a, I>(
    assigned: I,
    candidate: &Shift,
    max_daily_hours: Decimal,
) -> DailyHoursCheck
where
    I: IntoIterator<Item = &'a Shift>,
{
    let existing_minutes: u32 = assigned
        .into_iter()
        .filter(|shift| shift.date == candidate.date)
        .map(Shift::duration_minutes)
        .sum();
    let candidate_minutes = candidate.duration_minutes();
    let total_minutes = Decimal::from(existing_minutes + candidate_minutes);

    // Compare in minutes so fractional hours never round across the cap.
    // A cap too large to express in minutes cannot be reached.
    let within_limit = match max_daily_hours.checked_mul(Decimal::from(60)) {
        Some(max_minutes) => total_minutes <= max_minutes,
        None => true,
    };

    DailyHoursCheck {
        date: candidate.date,
        existing_minutes,
        candidate_minutes,
        total_hours: total_minutes / Decimal::from(60),
        max_daily_hours,
        within_limit,
    }
}
