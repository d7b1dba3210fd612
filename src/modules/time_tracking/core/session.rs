// The transient authenticated state. Lives only in memory and disappears on logout or restart.

use crate::modules::time_tracking::core::employee::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub is_admin: bool,
}

impl Session {
    pub fn employee(user: User) -> Self {
        Self {
            user,
            is_admin: false,
        }
    }

    pub fn admin(user: User) -> Self {
        Self {
            user,
            is_admin: true,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}
