//! Assignment model: the link between one employee and one shift.

use serde::{Deserialize, Serialize};

/// Links an employee to a shift.
///
/// The `(employee_id, shift_id)` pair is unique across the collection; the
/// rule engine enforces this before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// The assigned employee.
    pub employee_id: String,
    /// The shift the employee is assigned to.
    pub shift_id: String,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(employee_id: impl Into<String>, shift_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            shift_id: shift_id.into(),
        }
    }

    /// Returns true if this assignment links exactly this employee and shift.
    pub fn matches(&self, employee_id: &str, shift_id: &str) -> bool {
        self.employee_id == employee_id && self.shift_id == shift_id
    }
}
