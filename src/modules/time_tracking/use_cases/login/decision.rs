use crate::modules::time_tracking::core::session::Session;
use crate::modules::time_tracking::core::time_entry::TimeEntry;

/// One reason for every failed login, so callers cannot tell unknown, inactive and wrong
/// password apart.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoginRejected {
    #[error("invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted {
        session: Session,
        /// Demo ledger to install, set only for an admin login against an empty ledger.
        seed_ledger: Option<Vec<TimeEntry>>,
    },
    Rejected {
        reason: LoginRejected,
    },
}
