//! Hour calculations for the shift roster.
//!
//! This module contains the shift duration calculator, which handles shifts
//! that run past midnight, and the daily hours check that totals an
//! employee's hours on one date against the configured cap.

mod daily_hours;
mod shift_duration;

pub use daily_hours::{DailyHoursCheck, check_daily_hours};
pub use shift_duration::{
    MINUTES_PER_DAY, compute_shift_duration, shift_duration, shift_duration_minutes,
};
