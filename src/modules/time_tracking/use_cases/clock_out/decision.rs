use crate::modules::time_tracking::core::time_entry::TimeEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ClockOutRejected {
    #[error("no active session")]
    NoActiveSession,

    #[error("no open entry for today")]
    NoOpenEntry,

    #[error("clock-out time {clock_out} is before clock-in time {clock_in}")]
    ClockOutBeforeClockIn { clock_in: String, clock_out: String },
}

#[derive(Debug, PartialEq)]
pub enum Decision {
    /// `index` is the ledger position of the entry being closed.
    Accepted { index: usize, entry: TimeEntry },
    Rejected { reason: ClockOutRejected },
}
