use crate::modules::time_tracking::use_cases::clock_in::decision::ClockInRejected;
use crate::modules::time_tracking::use_cases::clock_out::decision::ClockOutRejected;
use crate::modules::time_tracking::use_cases::login::decision::LoginRejected;
use crate::modules::time_tracking::use_cases::manage_roster::decision::RosterRejected;
use crate::shared::infrastructure::key_value_store::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("login rejected: {0}")]
    Login(#[from] LoginRejected),

    #[error("clock-in rejected: {0}")]
    ClockIn(#[from] ClockInRejected),

    #[error("clock-out rejected: {0}")]
    ClockOut(#[from] ClockOutRejected),

    #[error("roster change rejected: {0}")]
    Roster(#[from] RosterRejected),
}

impl ApplicationError {
    /// True for domain rejections, false for storage failures.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, ApplicationError::Storage(_))
    }
}
