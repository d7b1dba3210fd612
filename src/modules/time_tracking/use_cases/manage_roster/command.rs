// Command data types for roster management.
//
// Purpose
// - NewEmployee: everything an admin enters for a new roster row. Id and creation date are
//   assigned by the store.
// - EmployeePatch: partial update. Absent fields keep their current value; id and creation date
//   are never patched.

use crate::modules::time_tracking::core::employee::Employee;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub is_active: bool,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}

impl EmployeePatch {
    pub fn is_active(mut self, v: bool) -> Self {
        self.is_active = Some(v);
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.email = Some(v.into());
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.password = Some(v.into());
        self
    }

    pub fn apply_to(&self, employee: &Employee) -> Employee {
        let mut merged = employee.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(email) = &self.email {
            merged.email = email.clone();
        }
        if let Some(department) = &self.department {
            merged.department = department.clone();
        }
        if let Some(position) = &self.position {
            merged.position = position.clone();
        }
        if let Some(is_active) = self.is_active {
            merged.is_active = is_active;
        }
        if let Some(password) = &self.password {
            merged.password = Some(password.clone());
        }
        merged
    }
}

#[cfg(test)]
mod employee_patch_tests {
    use super::*;
    use crate::test_support::fixtures::employees::EmployeeBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_keep_every_field_for_an_empty_patch() {
        let employee = EmployeeBuilder::new().build();
        assert_eq!(EmployeePatch::default().apply_to(&employee), employee);
    }

    #[rstest]
    fn it_should_merge_present_fields_only() {
        let employee = EmployeeBuilder::new().id("5").name("Old").build();
        let merged = EmployeePatch::default()
            .name("New")
            .is_active(false)
            .password("s3cret")
            .apply_to(&employee);
        assert_eq!(merged.id, "5");
        assert_eq!(merged.name, "New");
        assert!(!merged.is_active);
        assert_eq!(merged.password.as_deref(), Some("s3cret"));
        assert_eq!(merged.email, employee.email);
        assert_eq!(merged.created_at, employee.created_at);
    }
}
