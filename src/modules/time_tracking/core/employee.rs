// Roster row and the session view derived from it.
//
// Purpose
// - Employee is the persisted roster record, including its cleartext password.
// - User is the identity a session carries. It is never persisted and never holds a password.
//
// Persisted shape
// - camelCase field names, dates as YYYY-MM-DD, so existing browser storage dumps load unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Password given to employees created without one.
pub const DEFAULT_PASSWORD: &str = "password123";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub is_active: bool,
    pub created_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Employee {
    /// Exact email and password match on an active row.
    pub fn accepts(&self, email: &str, password: &str) -> bool {
        self.is_active && self.email == email && self.password.as_deref() == Some(password)
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
}
