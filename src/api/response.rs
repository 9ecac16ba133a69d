//! Response types for the shift roster API.
//!
//! This module defines the error body returned by every failing endpoint
//! and the mapping from engine errors and assignment rejections to HTTP
//! status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::roster::AssignmentRejection;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Body returned when an assignment is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    /// Always `"accepted"`.
    pub status: String,
    /// The assigned employee.
    pub employee_id: String,
    /// The assigned shift.
    pub shift_id: String,
}

impl AssignmentResponse {
    /// Creates an accepted response.
    pub fn accepted(employee_id: impl Into<String>, shift_id: impl Into<String>) -> Self {
        Self {
            status: "accepted".to_string(),
            employee_id: employee_id.into(),
            shift_id: shift_id.into(),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::StoreNotFound { .. }
            | EngineError::StoreParseError { .. }
            | EngineError::StoreWriteError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Record store failure", error.to_string()),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        error.to_string(),
                    ),
                }
            }
            EngineError::InvalidTime { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIME",
                    format!("Invalid clock time '{}'", value),
                    "Times must be four digits in HHMM form",
                ),
            },
            EngineError::EmployeeIdsExhausted { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("EMPLOYEE_IDS_EXHAUSTED", error.to_string()),
            },
            EngineError::LockPoisoned | EngineError::Io(_) | EngineError::TaskFailed { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "INTERNAL_ERROR",
                        "Internal error",
                        error.to_string(),
                    ),
                }
            }
        }
    }
}

impl From<AssignmentRejection> for ApiErrorResponse {
    fn from(rejection: AssignmentRejection) -> Self {
        let status = match rejection {
            AssignmentRejection::UnknownEmployee { .. } | AssignmentRejection::UnknownShift { .. } => {
                StatusCode::NOT_FOUND
            }
            AssignmentRejection::DuplicateAssignment { .. }
            | AssignmentRejection::DailyLimitExceeded { .. } => StatusCode::CONFLICT,
        };

        let error = match &rejection {
            AssignmentRejection::DailyLimitExceeded { total_hours, .. } => ApiError::with_details(
                rejection.code(),
                rejection.to_string(),
                format!("Total would be {} hours", total_hours.normalize()),
            ),
            _ => ApiError::new(rejection.code(), rejection.to_string()),
        };

        ApiErrorResponse { status, error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_store_error_is_internal() {
        let api_error: ApiErrorResponse = EngineError::StoreNotFound {
            path: "data/shifts.json".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "STORE_ERROR");
        assert!(api_error.error.details.unwrap().contains("data/shifts.json"));
    }

    #[test]
    fn test_exhausted_ids_are_conflict() {
        let api_error: ApiErrorResponse = EngineError::EmployeeIdsExhausted {
            employee_id: "E18446744073709551615".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "EMPLOYEE_IDS_EXHAUSTED");
    }

    #[test]
    fn test_failed_background_task_is_internal() {
        let api_error: ApiErrorResponse = EngineError::TaskFailed {
            message: "task panicked".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "INTERNAL_ERROR");
    }

    #[test]
    fn test_unknown_records_are_not_found() {
        let api_error: ApiErrorResponse = AssignmentRejection::UnknownShift {
            shift_id: "S9".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "UNKNOWN_SHIFT");
        assert_eq!(api_error.error.message, "Shift does not exist");
    }

    #[test]
    fn test_daily_limit_is_conflict_with_total() {
        let api_error: ApiErrorResponse = AssignmentRejection::DailyLimitExceeded {
            employee_id: "E001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            max_daily_hours: Decimal::new(8, 0),
            total_hours: Decimal::new(95, 1),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "DAILY_LIMIT_EXCEEDED");
        assert_eq!(api_error.error.details.as_deref(), Some("Total would be 9.5 hours"));
    }

    #[test]
    fn test_accepted_response_shape() {
        let json = serde_json::to_value(AssignmentResponse::accepted("E001", "S1")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "accepted", "employeeId": "E001", "shiftId": "S1"})
        );
    }
}
