#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RosterRejected {
    #[error("employee {0} not found")]
    EmployeeNotFound(String),

    #[error("email {0} is already used by an active employee")]
    DuplicateEmail(String),
}

/// Position of an existing roster row, paired with its replacement when there is one.
#[derive(Debug, PartialEq, Eq)]
pub struct RosterSlot<T> {
    pub index: usize,
    pub value: T,
}
