use crate::modules::time_tracking::core::time_entry::TimeEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClockInRejected {
    #[error("no active session")]
    NoActiveSession,

    #[error("already clocked in today")]
    AlreadyClockedIn,
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    Accepted { entry: TimeEntry },
    Rejected { reason: ClockInRejected },
}
