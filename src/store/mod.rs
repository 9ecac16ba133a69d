//! Record storage for the shift roster.
//!
//! The roster reads and appends records through the [`RecordStore`] trait,
//! so the rule engine never knows how data is kept. Two implementations are
//! provided: [`JsonFileStore`] over a directory of JSON files and
//! [`MemoryStore`] for tests and embedding.
//!
//! Every operation works on whole collections. Lookups default to a linear
//! scan of the matching `list_*` call.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{Assignment, Employee, NewEmployee, Shift};

/// The persistence collaborator holding employees, shifts, assignments and
/// the scheduling policy.
///
/// Implementations do not enforce business rules: `append_assignment`
/// writes whatever it is given. Uniqueness of assignments is the rule
/// engine's job.
pub trait RecordStore: Send + Sync {
    /// Returns every employee, in stored order.
    fn list_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Finds an employee by id.
    fn find_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>> {
        Ok(self
            .list_employees()?
            .into_iter()
            .find(|e| e.employee_id == employee_id))
    }

    /// Returns every shift, in stored order.
    fn list_shifts(&self) -> EngineResult<Vec<Shift>>;

    /// Finds a shift by id.
    fn find_shift(&self, shift_id: &str) -> EngineResult<Option<Shift>> {
        Ok(self
            .list_shifts()?
            .into_iter()
            .find(|s| s.shift_id == shift_id))
    }

    /// Returns every assignment, in stored order.
    fn list_assignments(&self) -> EngineResult<Vec<Assignment>>;

    /// Finds the assignment linking this employee and shift.
    fn find_assignment(
        &self,
        employee_id: &str,
        shift_id: &str,
    ) -> EngineResult<Option<Assignment>> {
        Ok(self
            .list_assignments()?
            .into_iter()
            .find(|a| a.matches(employee_id, shift_id)))
    }

    /// Appends an assignment.
    fn append_assignment(&self, assignment: Assignment) -> EngineResult<()>;

    /// Appends an employee, assigning the next sequential id.
    fn append_employee(&self, employee: NewEmployee) -> EngineResult<Employee>;

    /// Returns the scheduling policy.
    fn policy(&self) -> EngineResult<PolicyConfig>;
}
