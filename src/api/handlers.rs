//! HTTP request handlers for the shift roster API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::NewEmployee;
use crate::roster::AssignmentOutcome;

use super::request::{AssignmentRequest, CreateEmployeeRequest};
use super::response::{ApiError, ApiErrorResponse, AssignmentResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler).post(create_employee_handler))
        .route("/employees/:employee_id/schedule", get(schedule_handler))
        .route("/shifts", get(list_shifts_handler))
        .route("/assignments", post(assign_handler))
        .with_state(state)
}

/// Maps a JSON body rejection to a 400 response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Logs an engine error and converts it to a response.
fn engine_error_response(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing employees");

    match state.run_blocking(|roster| roster.list_employees()).await {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let new_employee: NewEmployee = request.into();
    match state
        .run_blocking(move |roster| roster.create_employee(new_employee))
        .await
    {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.employee_id,
                "Employee created"
            );
            (StatusCode::CREATED, Json(employee)).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /shifts.
async fn list_shifts_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing shifts");

    match state.run_blocking(|roster| roster.list_shifts()).await {
        Ok(shifts) => (StatusCode::OK, Json(shifts)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /assignments.
///
/// Accepted assignments return 201. Rule rejections return 404 for unknown
/// employees or shifts and 409 for duplicates or the daily hours cap.
async fn assign_handler(
    State(state): State<AppState>,
    payload: Result<Json<AssignmentRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing assignment request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let (employee_id, shift_id) = (request.employee_id.clone(), request.shift_id.clone());
    match state
        .run_blocking(move |roster| roster.assign_shift(&employee_id, &shift_id))
        .await
    {
        Ok(AssignmentOutcome::Accepted) => (
            StatusCode::CREATED,
            Json(AssignmentResponse::accepted(
                request.employee_id,
                request.shift_id,
            )),
        )
            .into_response(),
        Ok(AssignmentOutcome::Rejected(rejection)) => {
            info!(
                correlation_id = %correlation_id,
                reason = rejection.code(),
                "Assignment rejected"
            );
            ApiErrorResponse::from(rejection).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for GET /employees/:employee_id/schedule.
async fn schedule_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        employee_id = %employee_id,
        "Looking up schedule"
    );

    match state
        .run_blocking(move |roster| roster.schedule(&employee_id))
        .await
    {
        Ok(shifts) => (StatusCode::OK, Json(shifts)).into_response(),
        Err(err) => engine_error_response(correlation_id, err),
    }
}
