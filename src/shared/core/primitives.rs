// Primitives shared by every module: the clock port and identifier generation.
//
// Purpose
// - Give the core a single source for "now" so time arithmetic can be tested with a fixed clock.
//
// Boundaries
// - The clock reads local wall-clock time. Dates and times are naive on purpose; the ledger
//   stores calendar dates and minute-precision times of day, never instants.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::sync::Mutex;
use uuid::Uuid;

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current time of day truncated to the minute.
    fn time_of_day(&self) -> NaiveTime {
        truncate_to_minute(self.now().time())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a settable instant. Used by tests and scripted demos.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn at(date: NaiveDate, hour: u32, minute: u32) -> Self {
        Self::new(date.and_time(hm(hour, minute)))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = now;
    }

    pub fn set_time(&self, hour: u32, minute: u32) {
        let date = self.now().date();
        self.set(date.and_time(hm(hour, minute)));
    }

    #[cfg(test)]
    pub fn advance(&self, by: chrono::Duration) {
        let next = self.now() + by;
        self.set(next);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Fresh identifier for roster rows and ledger rows.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}
