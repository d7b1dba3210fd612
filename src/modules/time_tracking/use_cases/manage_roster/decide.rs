// Pure decision functions for roster management.
//
// Responsibilities
// - Keep emails unique among active employees, so login by email stays unambiguous.
// - Fill in the default password for new employees created without one.
// - Reject updates and deletes of unknown ids.

use crate::modules::time_tracking::core::employee::{DEFAULT_PASSWORD, Employee};
use crate::modules::time_tracking::use_cases::manage_roster::command::{EmployeePatch, NewEmployee};
use crate::modules::time_tracking::use_cases::manage_roster::decision::{
    RosterRejected, RosterSlot,
};
use chrono::NaiveDate;

fn email_taken(roster: &[Employee], email: &str, except_id: Option<&str>) -> bool {
    roster.iter().any(|employee| {
        employee.is_active && employee.email == email && Some(employee.id.as_str()) != except_id
    })
}

pub fn decide_add(
    roster: &[Employee],
    command: NewEmployee,
    employee_id: String,
    today: NaiveDate,
) -> Result<Employee, RosterRejected> {
    if command.is_active && email_taken(roster, &command.email, None) {
        return Err(RosterRejected::DuplicateEmail(command.email));
    }

    let password = command
        .password
        .filter(|password| !password.is_empty())
        .unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
    Ok(Employee {
        id: employee_id,
        name: command.name,
        email: command.email,
        department: command.department,
        position: command.position,
        is_active: command.is_active,
        created_at: today,
        password: Some(password),
    })
}

fn locate(roster: &[Employee], employee_id: &str) -> Result<usize, RosterRejected> {
    roster
        .iter()
        .position(|employee| employee.id == employee_id)
        .ok_or_else(|| RosterRejected::EmployeeNotFound(employee_id.to_string()))
}

pub fn decide_update(
    roster: &[Employee],
    employee_id: &str,
    patch: &EmployeePatch,
) -> Result<RosterSlot<Employee>, RosterRejected> {
    let index = locate(roster, employee_id)?;
    let merged = patch.apply_to(&roster[index]);
    if merged.is_active && email_taken(roster, &merged.email, Some(employee_id)) {
        return Err(RosterRejected::DuplicateEmail(merged.email));
    }
    Ok(RosterSlot {
        index,
        value: merged,
    })
}

/// The slot to remove. The caller also drops every ledger row of `employee_id`.
pub fn decide_delete(roster: &[Employee], employee_id: &str) -> Result<RosterSlot<()>, RosterRejected> {
    let index = locate(roster, employee_id)?;
    Ok(RosterSlot { index, value: () })
}

#[cfg(test)]
mod manage_roster_decide_tests {
    use super::*;
    use crate::modules::time_tracking::core::seed::demo_roster;
    use crate::test_support::fixtures::employees::NewEmployeeBuilder;
    use rstest::{fixture, rstest};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[fixture]
    fn roster() -> Vec<Employee> {
        demo_roster()
    }

    #[rstest]
    fn it_should_add_with_id_creation_date_and_default_password(roster: Vec<Employee>) {
        let command = NewEmployeeBuilder::new().email("ada@company.com").build();
        let employee = decide_add(&roster, command.clone(), "new-id".into(), today())
            .expect("expected the employee to be added");
        assert_eq!(employee.id, "new-id");
        assert_eq!(employee.created_at, today());
        assert_eq!(employee.password.as_deref(), Some(DEFAULT_PASSWORD));
        assert_eq!(employee.email, command.email);
        assert_eq!(employee.name, command.name);
    }

    #[rstest]
    #[case(Some("hunter2"), "hunter2")]
    #[case(Some(""), DEFAULT_PASSWORD)]
    #[case(None, DEFAULT_PASSWORD)]
    fn it_should_fill_in_the_password(
        roster: Vec<Employee>,
        #[case] given: Option<&str>,
        #[case] expected: &str,
    ) {
        let mut command = NewEmployeeBuilder::new().build();
        command.password = given.map(str::to_string);
        let employee = decide_add(&roster, command, "id".into(), today()).unwrap();
        assert_eq!(employee.password.as_deref(), Some(expected));
    }

    #[rstest]
    fn it_should_reject_a_duplicate_active_email(roster: Vec<Employee>) {
        let command = NewEmployeeBuilder::new().email("john.doe@company.com").build();
        assert_eq!(
            decide_add(&roster, command, "id".into(), today()),
            Err(RosterRejected::DuplicateEmail("john.doe@company.com".into()))
        );
    }

    #[rstest]
    fn it_should_allow_reusing_the_email_of_an_inactive_employee(roster: Vec<Employee>) {
        let mut roster = roster;
        roster[0].is_active = false;
        let command = NewEmployeeBuilder::new().email("john.doe@company.com").build();
        assert!(decide_add(&roster, command, "id".into(), today()).is_ok());
    }

    #[rstest]
    fn it_should_update_the_matching_row(roster: Vec<Employee>) {
        let patch = EmployeePatch::default().is_active(false);
        let slot = decide_update(&roster, "2", &patch).expect("expected the update to be accepted");
        assert_eq!(slot.index, 1);
        assert!(!slot.value.is_active);
        assert_eq!(slot.value.email, roster[1].email);
    }

    #[rstest]
    fn it_should_let_an_employee_keep_its_own_email(roster: Vec<Employee>) {
        let patch = EmployeePatch::default()
            .email("jane.smith@company.com")
            .name("Jane S.");
        assert!(decide_update(&roster, "2", &patch).is_ok());
    }

    #[rstest]
    fn it_should_reject_an_update_that_steals_an_email(roster: Vec<Employee>) {
        let patch = EmployeePatch::default().email("mike.johnson@company.com");
        assert_eq!(
            decide_update(&roster, "2", &patch),
            Err(RosterRejected::DuplicateEmail("mike.johnson@company.com".into()))
        );
    }

    #[rstest]
    fn it_should_reject_unknown_ids(roster: Vec<Employee>) {
        let not_found = RosterRejected::EmployeeNotFound("99".into());
        assert_eq!(
            decide_update(&roster, "99", &EmployeePatch::default()),
            Err(not_found.clone())
        );
        assert_eq!(decide_delete(&roster, "99"), Err(not_found));
    }

    #[rstest]
    fn it_should_locate_the_row_to_delete(roster: Vec<Employee>) {
        assert_eq!(
            decide_delete(&roster, "3"),
            Ok(RosterSlot { index: 2, value: () })
        );
    }
}
