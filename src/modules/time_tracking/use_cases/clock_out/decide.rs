// Pure decision function for clock-out.
//
// Responsibilities
// - Find the open entry of the session user for today.
// - Close it with the current time and the rounded hours between clock-in and clock-out.
// - Refuse a negative duration, the entry stays open.

use crate::modules::time_tracking::core::session::Session;
use crate::modules::time_tracking::core::time_entry::{TimeEntry, worked_hours};
use crate::modules::time_tracking::use_cases::clock_out::decision::{ClockOutRejected, Decision};
use chrono::{NaiveDate, NaiveTime};

pub fn decide_clock_out(
    session: Option<&Session>,
    ledger: &[TimeEntry],
    today: NaiveDate,
    now: NaiveTime,
) -> Decision {
    let Some(session) = session else {
        return Decision::Rejected {
            reason: ClockOutRejected::NoActiveSession,
        };
    };

    let open = ledger
        .iter()
        .enumerate()
        .find(|(_, entry)| entry.belongs_to(session.user_id(), today) && entry.is_open());
    let Some((index, entry)) = open else {
        return Decision::Rejected {
            reason: ClockOutRejected::NoOpenEntry,
        };
    };
    let Some(clock_in) = entry.clock_in else {
        return Decision::Rejected {
            reason: ClockOutRejected::NoOpenEntry,
        };
    };

    if now < clock_in {
        return Decision::Rejected {
            reason: ClockOutRejected::ClockOutBeforeClockIn {
                clock_in: clock_in.format("%H:%M").to_string(),
                clock_out: now.format("%H:%M").to_string(),
            },
        };
    }

    let mut closed = entry.clone();
    closed.clock_out = Some(now);
    closed.total_hours = worked_hours(clock_in, now);
    Decision::Accepted {
        index,
        entry: closed,
    }
}
