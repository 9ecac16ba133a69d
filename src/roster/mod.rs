//! The roster: assignment rules, the employee directory and schedule lookup.
//!
//! [`Roster`] wraps an injected [`RecordStore`] and is the only place
//! business rules run. Mutations (`assign_shift`, `create_employee`) are
//! serialized through an in-process lock, so the check-then-write sequence
//! of an assignment cannot interleave with another mutation issued through
//! the same `Roster`. Separate processes sharing one data directory are not
//! coordinated.

mod assignment;
mod directory;
mod outcome;
mod schedule;

pub use directory::next_employee_id;
pub use outcome::{AssignmentOutcome, AssignmentRejection};

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{EngineError, EngineResult};
use crate::store::RecordStore;

/// Business-rule layer over a record store.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use shift_roster::config::PolicyConfig;
/// use shift_roster::roster::{AssignmentRejection, AssignmentOutcome, Roster};
/// use shift_roster::store::MemoryStore;
///
/// let roster = Roster::new(Arc::new(MemoryStore::new(PolicyConfig::default())));
/// let outcome = roster.assign_shift("E001", "S1").unwrap();
/// assert!(matches!(
///     outcome,
///     AssignmentOutcome::Rejected(AssignmentRejection::UnknownEmployee { .. })
/// ));
/// ```
pub struct Roster {
    store: Arc<dyn RecordStore>,
    mutation_lock: Mutex<()>,
}

impl Roster {
    /// Creates a roster over the given store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            mutation_lock: Mutex::new(()),
        }
    }

    /// Returns the underlying record store.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    fn lock_mutations(&self) -> EngineResult<MutexGuard<'_, ()>> {
        self.mutation_lock
            .lock()
            .map_err(|_| EngineError::LockPoisoned)
    }
}

impl std::fmt::Debug for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roster").finish_non_exhaustive()
    }
}
