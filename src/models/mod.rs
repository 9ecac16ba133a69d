//! Core data models for the shift roster.
//!
//! This module contains the records held by the record store: employees,
//! shifts, the assignments linking them, and the `HHMM` clock time used by
//! shift start and end times.

mod assignment;
mod clock_time;
mod employee;
mod shift;

pub use assignment::Assignment;
pub use clock_time::ClockTime;
pub use employee::{Employee, NewEmployee};
pub use shift::Shift;
