// Pure decision function for clock-in.
//
// Responsibilities
// - Require a session.
// - Refuse a second open entry for the same employee and date.
// - Produce the new open entry. The caller supplies the id and the current date and time.

use crate::modules::time_tracking::core::session::Session;
use crate::modules::time_tracking::core::time_entry::TimeEntry;
use crate::modules::time_tracking::use_cases::clock_in::decision::{ClockInRejected, Decision};
use chrono::{NaiveDate, NaiveTime};

pub fn decide_clock_in(
    session: Option<&Session>,
    ledger: &[TimeEntry],
    entry_id: String,
    today: NaiveDate,
    now: NaiveTime,
) -> Decision {
    let Some(session) = session else {
        return Decision::Rejected {
            reason: ClockInRejected::NoActiveSession,
        };
    };

    let already_open = ledger
        .iter()
        .any(|entry| entry.belongs_to(session.user_id(), today) && entry.is_open());
    if already_open {
        return Decision::Rejected {
            reason: ClockInRejected::AlreadyClockedIn,
        };
    }

    Decision::Accepted {
        entry: TimeEntry::open(entry_id, session.user_id(), today, now),
    }
}

#[cfg(test)]
mod clock_in_decide_tests {
    use super::*;
    use crate::test_support::fixtures::employees::EmployeeBuilder;
    use rstest::{fixture, rstest};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[fixture]
    fn session() -> Session {
        Session::employee(EmployeeBuilder::new().id("7").build().to_user())
    }

    #[rstest]
    fn it_should_open_a_new_entry(session: Session) {
        let decision = decide_clock_in(Some(&session), &[], "te-1".into(), today(), t(9, 2));
        assert_eq!(
            decision,
            Decision::Accepted {
                entry: TimeEntry::open("te-1", "7", today(), t(9, 2))
            }
        );
    }

    #[rstest]
    fn it_should_reject_without_a_session() {
        let decision = decide_clock_in(None, &[], "te-1".into(), today(), t(9, 0));
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: ClockInRejected::NoActiveSession
            }
        );
    }

    #[rstest]
    fn it_should_reject_a_second_open_entry(session: Session) {
        let ledger = vec![TimeEntry::open("te-1", "7", today(), t(9, 0))];
        let decision = decide_clock_in(Some(&session), &ledger, "te-2".into(), today(), t(9, 5));
        assert_eq!(
            decision,
            Decision::Rejected {
                reason: ClockInRejected::AlreadyClockedIn
            }
        );
    }

    #[rstest]
    fn it_should_allow_a_new_entry_after_clocking_out(session: Session) {
        let mut closed = TimeEntry::open("te-1", "7", today(), t(9, 0));
        closed.clock_out = Some(t(12, 0));
        closed.total_hours = 3.0;
        let decision = decide_clock_in(Some(&session), &[closed], "te-2".into(), today(), t(13, 0));
        assert!(matches!(decision, Decision::Accepted { .. }));
    }

    #[rstest]
    fn it_should_ignore_open_entries_of_other_days_and_employees(session: Session) {
        let yesterday = today().pred_opt().unwrap();
        let ledger = vec![
            TimeEntry::open("te-1", "7", yesterday, t(9, 0)),
            TimeEntry::open("te-2", "8", today(), t(9, 0)),
        ];
        let decision = decide_clock_in(Some(&session), &ledger, "te-3".into(), today(), t(9, 0));
        assert!(matches!(decision, Decision::Accepted { .. }));
    }
}
