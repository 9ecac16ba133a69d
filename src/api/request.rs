//! Request types for the shift roster API.

use serde::{Deserialize, Serialize};

use crate::models::NewEmployee;

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// The employee's name.
    pub name: String,
    /// The employee's contact phone number.
    pub phone: String,
}

impl From<CreateEmployeeRequest> for NewEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        NewEmployee::new(req.name, req.phone)
    }
}

/// Request body for `POST /assignments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    /// The employee to assign.
    pub employee_id: String,
    /// The shift to assign them to.
    pub shift_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_assignment_request() {
        let json = r#"{"employeeId": "E001", "shiftId": "S1"}"#;
        let request: AssignmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, "E001");
        assert_eq!(request.shift_id, "S1");
    }

    #[test]
    fn test_assignment_request_requires_shift_id() {
        let json = r#"{"employeeId": "E001"}"#;
        let result: Result<AssignmentRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_employee_request_into_new_employee() {
        let json = r#"{"name": "Ada", "phone": "555-0100"}"#;
        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        let employee: NewEmployee = request.into();
        assert_eq!(employee, NewEmployee::new("Ada", "555-0100"));
    }
}
