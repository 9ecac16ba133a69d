//! Assignment outcomes.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Why an assignment was refused.
///
/// These are expected outcomes, not failures. The caller may retry with
/// different input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentRejection {
    /// No employee has this id.
    UnknownEmployee {
        /// The requested employee id.
        employee_id: String,
    },
    /// No shift has this id.
    UnknownShift {
        /// The requested shift id.
        shift_id: String,
    },
    /// The employee is already assigned to this shift.
    DuplicateAssignment {
        /// The employee id.
        employee_id: String,
        /// The shift id.
        shift_id: String,
    },
    /// The assignment would take the employee over the daily hours cap.
    DailyLimitExceeded {
        /// The employee id.
        employee_id: String,
        /// The date of the requested shift.
        date: NaiveDate,
        /// The configured cap.
        max_daily_hours: Decimal,
        /// Hours on that date had the assignment been accepted.
        total_hours: Decimal,
    },
}

impl AssignmentRejection {
    /// Returns a stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownEmployee { .. } => "UNKNOWN_EMPLOYEE",
            Self::UnknownShift { .. } => "UNKNOWN_SHIFT",
            Self::DuplicateAssignment { .. } => "DUPLICATE_ASSIGNMENT",
            Self::DailyLimitExceeded { .. } => "DAILY_LIMIT_EXCEEDED",
        }
    }
}

impl fmt::Display for AssignmentRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEmployee { .. } => write!(f, "Employee does not exist"),
            Self::UnknownShift { .. } => write!(f, "Shift does not exist"),
            Self::DuplicateAssignment { .. } => write!(f, "Employee already assigned to shift"),
            Self::DailyLimitExceeded {
                date,
                max_daily_hours,
                ..
            } => write!(
                f,
                "This assignment would exceed the daily limit of {} hours for this employee on {}.",
                max_daily_hours.normalize(),
                date
            ),
        }
    }
}

/// The result of an assignment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// The assignment passed every rule and was stored.
    Accepted,
    /// The assignment was refused and nothing was stored.
    Rejected(AssignmentRejection),
}

impl AssignmentOutcome {
    /// Returns true if the assignment was stored.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns the rejection, if any.
    pub fn rejection(&self) -> Option<&AssignmentRejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

impl fmt::Display for AssignmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted => write!(f, "Shift Recorded"),
            Self::Rejected(rejection) => fmt::Display::fmt(rejection, f),
        }
    }
}
