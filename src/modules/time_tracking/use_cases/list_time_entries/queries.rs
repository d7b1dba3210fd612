// Read side of the ledger: what the dashboards and history views ask for.
//
// Purpose
// - Filter and aggregate ledger rows without mutating them. Ledger order is always preserved.

use crate::modules::time_tracking::core::time_entry::{TimeEntry, round_hours};
use chrono::NaiveDate;
use serde::Serialize;

/// Today's entry for `employee_id`. An open entry wins over closed ones of the same day.
pub fn current_entry<'a>(
    ledger: &'a [TimeEntry],
    employee_id: &str,
    today: NaiveDate,
) -> Option<&'a TimeEntry> {
    let mut todays = ledger
        .iter()
        .filter(|entry| entry.belongs_to(employee_id, today));
    let first = todays.next()?;
    if first.is_open() {
        return Some(first);
    }
    todays.find(|entry| entry.is_open()).or(Some(first))
}

pub fn entries_for_employee<'a>(
    ledger: &'a [TimeEntry],
    employee_id: &'a str,
) -> impl Iterator<Item = &'a TimeEntry> + 'a {
    ledger
        .iter()
        .filter(move |entry| entry.employee_id == employee_id)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeHours {
    pub employee_id: String,
    pub entries: usize,
    pub open_entries: usize,
    pub total_hours: f64,
}

/// Per-employee totals in order of first appearance in the ledger.
pub fn hours_by_employee(ledger: &[TimeEntry]) -> Vec<EmployeeHours> {
    let mut summary: Vec<EmployeeHours> = Vec::new();
    for entry in ledger {
        let position = summary
            .iter()
            .position(|row| row.employee_id == entry.employee_id);
        let row = match position {
            Some(index) => &mut summary[index],
            None => {
                summary.push(EmployeeHours {
                    employee_id: entry.employee_id.clone(),
                    entries: 0,
                    open_entries: 0,
                    total_hours: 0.0,
                });
                let last = summary.len() - 1;
                &mut summary[last]
            }
        };
        row.entries += 1;
        if entry.is_open() {
            row.open_entries += 1;
        }
        row.total_hours = round_hours(row.total_hours + entry.total_hours);
    }
    summary
}

#[cfg(test)]
mod list_time_entries_queries_tests {
    use super::*;
    use crate::modules::time_tracking::core::seed::demo_ledger;
    use chrono::NaiveTime;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn closed(id: &str, employee_id: &str, date: NaiveDate, hours: f64) -> TimeEntry {
        let mut entry = TimeEntry::open(id, employee_id, date, t(8, 0));
        entry.clock_out = Some(t(9, 0));
        entry.total_hours = hours;
        entry
    }

    #[rstest]
    fn it_should_find_nothing_for_an_unknown_employee() {
        assert_eq!(current_entry(&demo_ledger(today()), "42", today()), None);
    }

    #[rstest]
    fn it_should_return_the_only_entry_of_today() {
        let ledger = demo_ledger(today());
        assert_eq!(current_entry(&ledger, "2", today()), Some(&ledger[1]));
        assert_eq!(current_entry(&ledger, "2", today().succ_opt().unwrap()), None);
    }

    #[rstest]
    fn it_should_prefer_the_open_entry_of_today() {
        let ledger = vec![
            closed("a", "7", today(), 3.0),
            TimeEntry::open("b", "7", today(), t(13, 0)),
        ];
        assert_eq!(current_entry(&ledger, "7", today()).map(|e| e.id.as_str()), Some("b"));
    }

    #[rstest]
    fn it_should_fall_back_to_the_first_closed_entry() {
        let ledger = vec![closed("a", "7", today(), 3.0), closed("b", "7", today(), 1.0)];
        assert_eq!(current_entry(&ledger, "7", today()).map(|e| e.id.as_str()), Some("a"));
    }

    #[rstest]
    fn it_should_filter_by_employee_in_ledger_order() {
        let yesterday = today().pred_opt().unwrap();
        let ledger = vec![
            closed("a", "7", yesterday, 1.0),
            closed("b", "8", yesterday, 1.0),
            closed("c", "7", today(), 2.0),
        ];
        let ids: Vec<_> = entries_for_employee(&ledger, "7").map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[rstest]
    fn it_should_summarize_hours_by_employee() {
        let yesterday = today().pred_opt().unwrap();
        let ledger = vec![
            closed("a", "7", yesterday, 7.67),
            closed("b", "8", yesterday, 8.0),
            closed("c", "7", today(), 0.33),
            TimeEntry::open("d", "7", today(), t(14, 0)),
        ];
        let summary = hours_by_employee(&ledger);
        assert_eq!(
            summary,
            vec![
                EmployeeHours {
                    employee_id: "7".into(),
                    entries: 3,
                    open_entries: 1,
                    total_hours: 8.0,
                },
                EmployeeHours {
                    employee_id: "8".into(),
                    entries: 1,
                    open_entries: 0,
                    total_hours: 8.0,
                },
            ]
        );
    }
}
