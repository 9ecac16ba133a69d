//! Error types for the shift roster.
//!
//! Business-rule rejections are not errors; they are reported as
//! [`AssignmentRejection`](crate::roster::AssignmentRejection) values. This
//! module covers the hard failures: unreadable or corrupt data files,
//! settings that cannot be loaded, and malformed clock times.

use thiserror::Error;

/// The main error type for the shift roster.
///
/// # Example
///
/// ```
/// use shift_roster::error::EngineError;
///
/// let error = EngineError::StoreNotFound {
///     path: "data/shifts.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Data file not found: data/shifts.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A data file was not found at the specified path.
    #[error("Data file not found: {path}")]
    StoreNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A data file could not be parsed.
    #[error("Failed to parse data file '{path}': {message}")]
    StoreParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A data file could not be written.
    #[error("Failed to write data file '{path}': {message}")]
    StoreWriteError {
        /// The path that could not be written.
        path: String,
        /// A description of the I/O error.
        message: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A clock time was not four digits forming a valid `HHMM` time.
    #[error("Invalid clock time '{value}': expected HHMM")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// The largest employee id is already at the numeric limit.
    #[error("No employee id follows '{employee_id}'")]
    EmployeeIdsExhausted {
        /// The existing id with the largest number.
        employee_id: String,
    },

    /// The roster's mutation lock was poisoned by a panicking writer.
    #[error("Roster mutation lock poisoned")]
    LockPoisoned,

    /// A background task running roster work did not complete.
    #[error("Background task failed: {message}")]
    TaskFailed {
        /// Why the task did not complete.
        message: String,
    },

    /// Console or network I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
