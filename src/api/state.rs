//! Application state for the shift roster API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::error::{EngineError, EngineResult};
use crate::roster::Roster;

/// Shared application state.
///
/// Every handler works through the same [`Roster`], so its mutation lock
/// serializes concurrent assignment requests.
#[derive(Clone)]
pub struct AppState {
    roster: Arc<Roster>,
}

impl AppState {
    /// Creates a new application state around the given roster.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster: Arc::new(roster),
        }
    }

    /// Runs roster work on the blocking thread pool.
    ///
    /// Roster calls read and write data files and wait on the mutation lock,
    /// so they must not run on the async workers.
    pub async fn run_blocking<T, F>(&self, work: F) -> EngineResult<T>
    where
        F: FnOnce(&Roster) -> EngineResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let roster = Arc::clone(&self.roster);

        tokio::task::spawn_blocking(move || work(&roster))
            .await
            .map_err(|e| EngineError::TaskFailed {
                message: format!("roster task panicked: {}", e),
            })?
    }
}
