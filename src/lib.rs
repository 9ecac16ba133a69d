//! Shift roster with assignment rules.
//!
//! This crate tracks employees, shifts and the assignment of employees to
//! shifts. Every assignment passes through [`roster::Roster`], which checks
//! that both records exist, that the pair is not already assigned, and that
//! the employee stays within the daily hours cap.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod roster;
pub mod store;
