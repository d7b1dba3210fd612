// Shared test builders for roster rows and new-employee commands.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::modules::time_tracking::core::employee::{DEFAULT_PASSWORD, Employee};
use crate::modules::time_tracking::use_cases::manage_roster::command::NewEmployee;
use chrono::NaiveDate;

pub struct EmployeeBuilder {
    inner: Employee,
}

impl Default for EmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeBuilder {
    pub fn new() -> Self {
        Self {
            inner: Employee {
                id: "emp-fixed-0001".to_string(),
                name: "Grace Hopper".to_string(),
                email: "grace.hopper@company.com".to_string(),
                department: "Engineering".to_string(),
                position: "Rear Admiral".to_string(),
                is_active: true,
                created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                password: Some(DEFAULT_PASSWORD.to_string()),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = Some(v.into());
        self
    }

    pub fn no_password(mut self) -> Self {
        self.inner.password = None;
        self
    }

    pub fn is_active(mut self, v: bool) -> Self {
        self.inner.is_active = v;
        self
    }

    pub fn build(self) -> Employee {
        self.inner
    }
}

pub struct NewEmployeeBuilder {
    inner: NewEmployee,
}

impl Default for NewEmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewEmployeeBuilder {
    pub fn new() -> Self {
        Self {
            inner: NewEmployee {
                name: "Ada Lovelace".to_string(),
                email: "ada.lovelace@company.com".to_string(),
                department: "Research".to_string(),
                position: "Analyst".to_string(),
                is_active: true,
                password: None,
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = Some(v.into());
        self
    }

    pub fn is_active(mut self, v: bool) -> Self {
        self.inner.is_active = v;
        self
    }

    pub fn build(self) -> NewEmployee {
        self.inner
    }
}
