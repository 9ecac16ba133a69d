//! Assignment rule engine.
//!
//! An assignment is checked against four rules, in order, stopping at the
//! first failure:
//!
//! 1. the employee exists
//! 2. the shift exists
//! 3. the employee is not already assigned to the shift
//! 4. the employee's hours on the shift's date stay within the daily cap
//!
//! Only when all four pass is the assignment written, exactly once.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculation::{DailyHoursCheck, check_daily_hours};
use crate::error::EngineResult;
use crate::models::{Assignment, Shift};

use super::{AssignmentOutcome, AssignmentRejection, Roster};

impl Roster {
    /// Assigns an employee to a shift if every rule passes.
    ///
    /// Returns `Ok(AssignmentOutcome::Rejected(..))` for rule failures and
    /// `Err` only when the store cannot be read or written.
    pub fn assign_shift(&self, employee_id: &str, shift_id: &str) -> EngineResult<AssignmentOutcome> {
        let _guard = self.lock_mutations()?;

        let outcome = match self.evaluate(employee_id, shift_id)? {
            Some(rejection) => AssignmentOutcome::Rejected(rejection),
            None => {
                self.store
                    .append_assignment(Assignment::new(employee_id, shift_id))?;
                AssignmentOutcome::Accepted
            }
        };

        match &outcome {
            AssignmentOutcome::Accepted => {
                info!(employee_id, shift_id, "Assignment accepted");
            }
            AssignmentOutcome::Rejected(rejection) => {
                info!(
                    employee_id,
                    shift_id,
                    reason = rejection.code(),
                    "Assignment rejected"
                );
            }
        }

        Ok(outcome)
    }

    /// Runs the rules in order and returns the first rejection.
    fn evaluate(&self, employee_id: &str, shift_id: &str) -> EngineResult<Option<AssignmentRejection>> {
        if self.store.find_employee(employee_id)?.is_none() {
            return Ok(Some(AssignmentRejection::UnknownEmployee {
                employee_id: employee_id.to_string(),
            }));
        }

        let Some(shift) = self.store.find_shift(shift_id)? else {
            return Ok(Some(AssignmentRejection::UnknownShift {
                shift_id: shift_id.to_string(),
            }));
        };

        if self.store.find_assignment(employee_id, shift_id)?.is_some() {
            return Ok(Some(AssignmentRejection::DuplicateAssignment {
                employee_id: employee_id.to_string(),
                shift_id: shift_id.to_string(),
            }));
        }

        let max_daily_hours = self.store.policy()?.max_daily_hours;
        let check = self.daily_hours_with(employee_id, &shift, max_daily_hours)?;
        if !check.within_limit {
            return Ok(Some(AssignmentRejection::DailyLimitExceeded {
                employee_id: employee_id.to_string(),
                date: check.date,
                max_daily_hours: check.max_daily_hours,
                total_hours: check.total_hours,
            }));
        }

        Ok(None)
    }

    /// Totals the employee's assigned hours on `candidate`'s date plus the
    /// candidate itself.
    fn daily_hours_with(
        &self,
        employee_id: &str,
        candidate: &Shift,
        max_daily_hours: Decimal,
    ) -> EngineResult<DailyHoursCheck> {
        let assignments = self.store.list_assignments()?;
        let shifts = self.store.list_shifts()?;

        let assigned_ids: HashSet<&str> = assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .map(|a| a.shift_id.as_str())
            .collect();

        let check = check_daily_hours(
            shifts
                .iter()
                .filter(|s| assigned_ids.contains(s.shift_id.as_str())),
            candidate,
            max_daily_hours,
        );

        debug!(
            employee_id,
            date = %check.date,
            existing_minutes = check.existing_minutes,
            candidate_minutes = check.candidate_minutes,
            max_daily_hours = %check.max_daily_hours,
            "Daily hours checked"
        );

        Ok(check)
    }
}
