//! In-memory record store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Assignment, Employee, NewEmployee, Shift};
use crate::roster::next_employee_id;

use super::RecordStore;

/// A record store that keeps every collection in memory.
///
/// Useful for tests and for embedding the roster without touching disk.
///
/// # Example
///
/// ```
/// use shift_roster::config::PolicyConfig;
/// use shift_roster::models::NewEmployee;
/// use shift_roster::store::{MemoryStore, RecordStore};
///
/// let store = MemoryStore::new(PolicyConfig::default());
/// let employee = store.append_employee(NewEmployee::new("Ada", "555-0100")).unwrap();
/// assert_eq!(employee.employee_id, "E001");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: RwLock<Vec<Employee>>,
    shifts: RwLock<Vec<Shift>>,
    assignments: RwLock<Vec<Assignment>>,
    policy: RwLock<PolicyConfig>,
}

impl MemoryStore {
    /// Creates an empty store with the given policy.
    pub fn new(policy: PolicyConfig) -> Self {
        Self {
            policy: RwLock::new(policy),
            ..Self::default()
        }
    }

    /// Seeds the employee collection.
    pub fn with_employees(self, employees: Vec<Employee>) -> Self {
        Self {
            employees: RwLock::new(employees),
            ..self
        }
    }

    /// Seeds the shift collection.
    pub fn with_shifts(self, shifts: Vec<Shift>) -> Self {
        Self {
            shifts: RwLock::new(shifts),
            ..self
        }
    }

    /// Seeds the assignment collection.
    pub fn with_assignments(self, assignments: Vec<Assignment>) -> Self {
        Self {
            assignments: RwLock::new(assignments),
            ..self
        }
    }

    /// Replaces the policy.
    pub fn set_policy(&self, policy: PolicyConfig) -> EngineResult<()> {
        *write(&self.policy)? = policy;
        Ok(())
    }
}

fn read<T>(lock: &RwLock<T>) -> EngineResult<RwLockReadGuard<'_, T>> {
    lock.read().map_err(|_| EngineError::LockPoisoned)
}

fn write<T>(lock: &RwLock<T>) -> EngineResult<RwLockWriteGuard<'_, T>> {
    lock.write().map_err(|_| EngineError::LockPoisoned)
}

impl RecordStore for MemoryStore {
    fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(read(&self.employees)?.clone())
    }

    fn list_shifts(&self) -> EngineResult<Vec<Shift>> {
        Ok(read(&self.shifts)?.clone())
    }

    fn list_assignments(&self) -> EngineResult<Vec<Assignment>> {
        Ok(read(&self.assignments)?.clone())
    }

    fn append_assignment(&self, assignment: Assignment) -> EngineResult<()> {
        write(&self.assignments)?.push(assignment);
        Ok(())
    }

    fn append_employee(&self, employee: NewEmployee) -> EngineResult<Employee> {
        let mut employees = write(&self.employees)?;
        let employee = employee.with_id(next_employee_id(&employees)?);
        employees.push(employee.clone());
        Ok(employee)
    }

    fn policy(&self) -> EngineResult<PolicyConfig> {
        Ok(read(&self.policy)?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new(PolicyConfig::default());
        assert!(store.list_employees().unwrap().is_empty());
        assert!(store.list_shifts().unwrap().is_empty());
        assert!(store.list_assignments().unwrap().is_empty());
        assert_eq!(store.policy().unwrap().max_daily_hours, Decimal::new(8, 0));
    }

    #[test]
    fn test_append_employee_sequence() {
        let store = MemoryStore::new(PolicyConfig::default());

        let first = store.append_employee(NewEmployee::new("Ada", "1")).unwrap();
        let second = store.append_employee(NewEmployee::new("Grace", "2")).unwrap();

        assert_eq!(first.employee_id, "E001");
        assert_eq!(second.employee_id, "E002");
        assert_eq!(store.list_employees().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_append_assignment_does_not_deduplicate() {
        let store = MemoryStore::new(PolicyConfig::default());

        store.append_assignment(Assignment::new("E001", "S1")).unwrap();
        store.append_assignment(Assignment::new("E001", "S1")).unwrap();

        assert_eq!(store.list_assignments().unwrap().len(), 2);
    }

    #[test]
    fn test_set_policy() {
        let store = MemoryStore::new(PolicyConfig::default());
        store.set_policy(PolicyConfig::new(Decimal::new(12, 0))).unwrap();
        assert_eq!(store.policy().unwrap().max_daily_hours, Decimal::new(12, 0));
    }
}
