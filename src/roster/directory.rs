//! Employee directory operations and id generation.

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, NewEmployee};

use super::Roster;

/// Computes the id for the next employee.
///
/// Takes the largest number following the first character of each existing
/// id, adds one, and formats it as `"E"` with at least three digits. Ids
/// whose remainder is not a plain number are skipped. Fails with
/// [`EngineError::EmployeeIdsExhausted`] when the largest number has no
/// successor.
///
/// # Examples
///
/// ```
/// use shift_roster::models::NewEmployee;
/// use shift_roster::roster::next_employee_id;
///
/// assert_eq!(next_employee_id(&[]).unwrap(), "E001");
///
/// let existing = vec![
///     NewEmployee::new("Ada", "1").with_id("E003"),
///     NewEmployee::new("Grace", "2").with_id("E009"),
/// ];
/// assert_eq!(next_employee_id(&existing).unwrap(), "E010");
/// ```
pub fn next_employee_id(existing: &[Employee]) -> EngineResult<String> {
    let max = existing
        .iter()
        .filter_map(|employee| {
            let mut chars = employee.employee_id.chars();
            chars.next();
            let suffix = chars.as_str();

            match suffix.parse::<u64>() {
                Ok(n) if suffix.bytes().all(|b| b.is_ascii_digit()) => Some((n, employee)),
                _ => {
                    warn!(
                        employee_id = %employee.employee_id,
                        "Skipping non-conforming employee id during id generation"
                    );
                    None
                }
            }
        })
        .max_by_key(|(n, _)| *n);

    let next = match max {
        None => 1,
        Some((n, employee)) => n.checked_add(1).ok_or_else(|| {
            EngineError::EmployeeIdsExhausted {
                employee_id: employee.employee_id.clone(),
            }
        })?,
    };

    Ok(format!("E{:03}", next))
}

impl Roster {
    /// Returns every employee in the directory.
    pub fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        self.store.list_employees()
    }

    /// Adds an employee, assigning the next sequential id.
    pub fn create_employee(&self, employee: NewEmployee) -> EngineResult<Employee> {
        let _guard = self.lock_mutations()?;
        let created = self.store.append_employee(employee)?;
        info!(employee_id = %created.employee_id, "Employee created");
        Ok(created)
    }
}
