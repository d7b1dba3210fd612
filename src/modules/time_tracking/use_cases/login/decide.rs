// Pure decision functions for login.
//
// Responsibilities
// - bootstrap_roster: hand out the demo roster whenever the roster is empty.
// - decide_login: resolve credentials in order, seed accounts first, then active roster rows.
// - Never perform input or output.

use crate::modules::time_tracking::core::employee::Employee;
use crate::modules::time_tracking::core::seed::{SeedAccounts, demo_ledger, demo_roster};
use crate::modules::time_tracking::core::session::Session;
use crate::modules::time_tracking::core::time_entry::TimeEntry;
use crate::modules::time_tracking::use_cases::login::command::Login;
use crate::modules::time_tracking::use_cases::login::decision::{Decision, LoginRejected};
use chrono::NaiveDate;

pub fn bootstrap_roster(roster: &[Employee]) -> Option<Vec<Employee>> {
    roster.is_empty().then(demo_roster)
}

pub fn decide_login(
    roster: &[Employee],
    ledger: &[TimeEntry],
    accounts: &SeedAccounts,
    command: &Login,
    today: NaiveDate,
) -> Decision {
    if let Some(account) = accounts.find(&command.email, &command.password) {
        if account.is_admin() {
            return Decision::Accepted {
                session: Session::admin(account.identity.clone()),
                seed_ledger: ledger.is_empty().then(|| demo_ledger(today)),
            };
        }
        return Decision::Accepted {
            session: Session::employee(account.identity.clone()),
            seed_ledger: None,
        };
    }

    match roster
        .iter()
        .find(|employee| employee.accepts(&command.email, &command.password))
    {
        Some(employee) => Decision::Accepted {
            session: Session::employee(employee.to_user()),
            seed_ledger: None,
        },
        None => Decision::Rejected {
            reason: LoginRejected::InvalidCredentials,
        },
    }
}
