//! Employee model.
//!
//! This module defines the Employee record and the NewEmployee input used
//! when adding someone to the directory.

use serde::{Deserialize, Serialize};

/// Represents an employee in the roster directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier, `"E"` followed by a zero-padded sequence number.
    pub employee_id: String,
    /// The employee's name.
    pub name: String,
    /// The employee's contact phone number.
    pub phone: String,
}

/// The details supplied when creating an employee, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// The employee's name.
    pub name: String,
    /// The employee's contact phone number.
    pub phone: String,
}

impl NewEmployee {
    /// Creates a new employee input.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Attaches an assigned id, producing the stored record.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_roster::models::NewEmployee;
    ///
    /// let employee = NewEmployee::new("Ada", "555-0100").with_id("E001");
    /// assert_eq!(employee.employee_id, "E001");
    /// assert_eq!(employee.name, "Ada");
    /// ```
    pub fn with_id(self, employee_id: impl Into<String>) -> Employee {
        Employee {
            employee_id: employee_id.into(),
            name: self.name,
            phone: self.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee_record() {
        let json = r#"{
            "employeeId": "E004",
            "name": "Grace Hopper",
            "phone": "555-0199"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_id, "E004");
        assert_eq!(employee.name, "Grace Hopper");
        assert_eq!(employee.phone, "555-0199");
    }

    #[test]
    fn test_serialize_uses_camel_case_id() {
        let employee = NewEmployee::new("Ada", "555-0100").with_id("E001");
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["employeeId"], "E001");
        assert!(json.get("employee_id").is_none());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"employeeId": "E001", "name": "Ada"}"#;
        let result: Result<Employee, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
