//! Schedule lookup.

use std::collections::HashSet;

use crate::error::EngineResult;
use crate::models::Shift;

use super::Roster;

impl Roster {
    /// Returns the shifts assigned to an employee.
    ///
    /// Shifts come back in the store's shift order, not by date, and each
    /// appears once. An unknown employee has an empty schedule.
    pub fn schedule(&self, employee_id: &str) -> EngineResult<Vec<Shift>> {
        let assignments = self.store.list_assignments()?;
        let assigned_ids: HashSet<&str> = assignments
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .map(|a| a.shift_id.as_str())
            .collect();

        Ok(self
            .store
            .list_shifts()?
            .into_iter()
            .filter(|s| assigned_ids.contains(s.shift_id.as_str()))
            .collect())
    }

    /// Returns every shift in the store.
    pub fn list_shifts(&self) -> EngineResult<Vec<Shift>> {
        self.store.list_shifts()
    }
}
