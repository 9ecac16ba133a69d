//! HTTP API module for the shift roster.
//!
//! This module provides REST endpoints for listing and creating employees,
//! listing shifts, assigning employees to shifts and reading schedules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AssignmentRequest, CreateEmployeeRequest};
pub use response::{ApiError, ApiErrorResponse, AssignmentResponse};
pub use state::AppState;
