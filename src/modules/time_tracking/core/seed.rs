// Demo data and seed accounts.
//
// Purpose
// - Bootstrap an empty roster with three demo employees and an empty ledger with four demo
//   entries for the admin overview.
// - Describe the accounts that open a session without a roster row: the administrator and the
//   legacy demo employee. They are plain values handed to the store, matched by the same
//   credential check as roster rows.

use crate::modules::time_tracking::core::employee::{DEFAULT_PASSWORD, Employee, User};
use crate::modules::time_tracking::core::time_entry::TimeEntry;
use chrono::{NaiveDate, NaiveTime};

pub const ADMIN_EMAIL: &str = "admin@company.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const LEGACY_EMAIL: &str = "employee@company.com";
pub const LEGACY_PASSWORD: &str = "password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedRole {
    Admin,
    Employee,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAccount {
    pub email: String,
    pub password: String,
    pub role: SeedRole,
    pub identity: User,
}

impl SeedAccount {
    pub fn admin(email: impl Into<String>, password: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            identity: User {
                id: "admin".to_string(),
                name: "Admin User".to_string(),
                email: email.clone(),
                department: "Administration".to_string(),
                position: "System Administrator".to_string(),
            },
            email,
            password: password.into(),
            role: SeedRole::Admin,
        }
    }

    /// Demo employee login bound to roster id "1" without consulting the roster.
    pub fn legacy_employee(email: impl Into<String>, password: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            identity: User {
                id: "1".to_string(),
                name: "John Doe".to_string(),
                email: email.clone(),
                department: "Engineering".to_string(),
                position: "Software Developer".to_string(),
            },
            email,
            password: password.into(),
            role: SeedRole::Employee,
        }
    }

    pub fn accepts(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    pub fn is_admin(&self) -> bool {
        self.role == SeedRole::Admin
    }
}

/// Ordered list of seed accounts, checked before the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAccounts(Vec<SeedAccount>);

impl SeedAccounts {
    pub fn new(accounts: Vec<SeedAccount>) -> Self {
        Self(accounts)
    }

    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn find(&self, email: &str, password: &str) -> Option<&SeedAccount> {
        self.0.iter().find(|account| account.accepts(email, password))
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &SeedAccount> {
        self.0.iter()
    }
}

impl Default for SeedAccounts {
    fn default() -> Self {
        Self(vec![
            SeedAccount::admin(ADMIN_EMAIL, ADMIN_PASSWORD),
            SeedAccount::legacy_employee(LEGACY_EMAIL, LEGACY_PASSWORD),
        ])
    }
}

pub fn demo_roster() -> Vec<Employee> {
    [
        ("1", "John Doe", "john.doe@company.com", "Engineering", "Software Developer", 1),
        ("2", "Jane Smith", "jane.smith@company.com", "Marketing", "Marketing Manager", 2),
        ("3", "Mike Johnson", "mike.johnson@company.com", "Sales", "Sales Representative", 3),
    ]
    .into_iter()
    .map(|(id, name, email, department, position, day)| Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        is_active: true,
        created_at: NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default(),
        password: Some(DEFAULT_PASSWORD.to_string()),
    })
    .collect()
}

/// On-time, late, early-leave and late-plus-early records, all dated `today`.
pub fn demo_ledger(today: NaiveDate) -> Vec<TimeEntry> {
    [
        ("1", (8, 45), (17, 30), 8.75),
        ("2", (9, 15), (17, 45), 8.5),
        ("3", (8, 30), (16, 30), 8.0),
        ("4", (9, 5), (16, 45), 7.67),
    ]
    .into_iter()
    .map(|(id, clock_in, clock_out, total_hours)| TimeEntry {
        id: id.to_string(),
        employee_id: id.to_string(),
        date: today,
        clock_in: NaiveTime::from_hms_opt(clock_in.0, clock_in.1, 0),
        clock_out: NaiveTime::from_hms_opt(clock_out.0, clock_out.1, 0),
        total_hours,
    })
    .collect()
}
