// Session and ledger store: the single owner of the roster, the ledger and the current session.
//
// Responsibilities
// - Load roster and ledger from the repository once, at construction.
// - Run the pure decider of each use case against the current state.
// - Persist the touched collection before installing it in memory, so a failed write leaves
//   memory and storage in agreement and the operation without effect.
//
// Boundaries
// - One instance per storage location. Concurrent processes on the same storage race, last
//   writer wins.

use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::employee::{Employee, User};
use crate::modules::time_tracking::core::ports::TimeTrackingRepository;
use crate::modules::time_tracking::core::seed::SeedAccounts;
use crate::modules::time_tracking::core::session::Session;
use crate::modules::time_tracking::core::time_entry::TimeEntry;
use crate::modules::time_tracking::use_cases::clock_in::decide::decide_clock_in;
use crate::modules::time_tracking::use_cases::clock_in::decision::Decision as ClockInDecision;
use crate::modules::time_tracking::use_cases::clock_out::decide::decide_clock_out;
use crate::modules::time_tracking::use_cases::clock_out::decision::Decision as ClockOutDecision;
use crate::modules::time_tracking::use_cases::list_time_entries::queries::{
    EmployeeHours, current_entry, entries_for_employee, hours_by_employee,
};
use crate::modules::time_tracking::use_cases::login::command::Login;
use crate::modules::time_tracking::use_cases::login::decide::{bootstrap_roster, decide_login};
use crate::modules::time_tracking::use_cases::login::decision::Decision as LoginDecision;
use crate::modules::time_tracking::use_cases::manage_roster::command::{EmployeePatch, NewEmployee};
use crate::modules::time_tracking::use_cases::manage_roster::decide::{
    decide_add, decide_delete, decide_update,
};
use crate::shared::core::primitives::{Clock, new_id};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct TimeTrackingStore<TRepository, TClock>
where
    TRepository: TimeTrackingRepository + 'static,
    TClock: Clock + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<TClock>,
    seed_accounts: SeedAccounts,
    session: Option<Session>,
    roster: Vec<Employee>,
    ledger: Vec<TimeEntry>,
}

impl<TRepository, TClock> TimeTrackingStore<TRepository, TClock>
where
    TRepository: TimeTrackingRepository + 'static,
    TClock: Clock + 'static,
{
    pub async fn load(
        repository: Arc<TRepository>,
        clock: Arc<TClock>,
        seed_accounts: SeedAccounts,
    ) -> Result<Self, ApplicationError> {
        let roster = repository.load_roster().await?;
        let ledger = repository.load_ledger().await?;
        info!(
            employees = roster.len(),
            time_entries = ledger.len(),
            "time tracking state loaded"
        );
        Ok(Self {
            repository,
            clock,
            seed_accounts,
            session: None,
            roster,
            ledger,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.is_admin)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.roster
    }

    pub fn employee(&self, employee_id: &str) -> Option<&Employee> {
        self.roster.iter().find(|employee| employee.id == employee_id)
    }

    pub fn time_entries(&self) -> &[TimeEntry] {
        &self.ledger
    }

    /// Resolves credentials and starts a session. Seeds the demo roster first whenever the
    /// roster is empty, whatever the outcome of the credential check.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Session, ApplicationError> {
        if let Some(seeded) = bootstrap_roster(&self.roster) {
            info!(employees = seeded.len(), "roster empty, seeding demo employees");
            self.commit_roster(seeded).await?;
        }

        let command = Login::new(email, password);
        let today = self.clock.today();
        match decide_login(&self.roster, &self.ledger, &self.seed_accounts, &command, today) {
            LoginDecision::Accepted {
                session,
                seed_ledger,
            } => {
                if let Some(seeded) = seed_ledger {
                    info!(time_entries = seeded.len(), "ledger empty, seeding demo entries");
                    self.commit_ledger(seeded).await?;
                }
                info!(user_id = %session.user.id, is_admin = session.is_admin, "session started");
                self.session = Some(session.clone());
                Ok(session)
            }
            LoginDecision::Rejected { reason } => {
                warn!(email, "login rejected");
                Err(reason.into())
            }
        }
    }

    /// Boolean form of `login` for callers that only need to know whether a session exists now.
    pub async fn login_succeeds(&mut self, email: &str, password: &str) -> bool {
        match self.login(email, password).await {
            Ok(_) => true,
            Err(err) => {
                if !err.is_rejection() {
                    warn!(error = %err, "login aborted by a storage failure");
                }
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(user_id = %session.user.id, "session ended");
        }
    }

    pub fn current_entry(&self) -> Option<&TimeEntry> {
        let session = self.session.as_ref()?;
        current_entry(&self.ledger, session.user_id(), self.clock.today())
    }

    pub async fn clock_in(&mut self) -> Result<TimeEntry, ApplicationError> {
        let decision = decide_clock_in(
            self.session.as_ref(),
            &self.ledger,
            new_id(),
            self.clock.today(),
            self.clock.time_of_day(),
        );
        match decision {
            ClockInDecision::Accepted { entry } => {
                let mut next = self.ledger.clone();
                next.push(entry.clone());
                self.commit_ledger(next).await?;
                debug!(employee_id = %entry.employee_id, date = %entry.date, "clocked in");
                Ok(entry)
            }
            ClockInDecision::Rejected { reason } => {
                debug!(%reason, "clock-in rejected");
                Err(reason.into())
            }
        }
    }

    pub async fn clock_out(&mut self) -> Result<TimeEntry, ApplicationError> {
        let decision = decide_clock_out(
            self.session.as_ref(),
            &self.ledger,
            self.clock.today(),
            self.clock.time_of_day(),
        );
        match decision {
            ClockOutDecision::Accepted { index, entry } => {
                let mut next = self.ledger.clone();
                next[index] = entry.clone();
                self.commit_ledger(next).await?;
                debug!(
                    employee_id = %entry.employee_id,
                    total_hours = entry.total_hours,
                    "clocked out"
                );
                Ok(entry)
            }
            ClockOutDecision::Rejected { reason } => {
                debug!(%reason, "clock-out rejected");
                Err(reason.into())
            }
        }
    }

    pub async fn add_employee(&mut self, command: NewEmployee) -> Result<Employee, ApplicationError> {
        let employee = decide_add(&self.roster, command, new_id(), self.clock.today())
            .inspect_err(|reason| debug!(%reason, "roster change rejected"))?;
        let mut next = self.roster.clone();
        next.push(employee.clone());
        self.commit_roster(next).await?;
        info!(employee_id = %employee.id, "employee added");
        Ok(employee)
    }

    /// Merges the present fields of `patch` into the employee.
    pub async fn update_employee(
        &mut self,
        employee_id: &str,
        patch: EmployeePatch,
    ) -> Result<Employee, ApplicationError> {
        let slot = decide_update(&self.roster, employee_id, &patch)
            .inspect_err(|reason| debug!(%reason, "roster change rejected"))?;
        let mut next = self.roster.clone();
        next[slot.index] = slot.value.clone();
        self.commit_roster(next).await?;
        info!(employee_id, "employee updated");
        Ok(slot.value)
    }

    /// Removes the employee and every ledger row that belongs to them. Returns the number of
    /// ledger rows removed.
    ///
    /// The ledger is written first. A failed roster write restores the previous ledger, and the
    /// employee stays on the roster either way, so the delete can be retried.
    pub async fn delete_employee(&mut self, employee_id: &str) -> Result<usize, ApplicationError> {
        let slot = decide_delete(&self.roster, employee_id)
            .inspect_err(|reason| debug!(%reason, "roster change rejected"))?;
        let mut roster = self.roster.clone();
        roster.remove(slot.index);
        let ledger: Vec<TimeEntry> = self
            .ledger
            .iter()
            .filter(|entry| entry.employee_id != employee_id)
            .cloned()
            .collect();
        let removed = self.ledger.len() - ledger.len();
        let previous_ledger = self.ledger.clone();
        self.commit_ledger(ledger).await?;
        if let Err(err) = self.commit_roster(roster).await {
            if let Err(restore_err) = self.commit_ledger(previous_ledger).await {
                warn!(error = %restore_err, employee_id, "ledger not restored after a failed delete");
            }
            return Err(err);
        }
        info!(employee_id, removed_entries = removed, "employee deleted");
        Ok(removed)
    }

    pub fn employee_time_entries(&self, employee_id: &str) -> Vec<TimeEntry> {
        entries_for_employee(&self.ledger, employee_id)
            .cloned()
            .collect()
    }

    pub fn all_time_entries(&self) -> &[TimeEntry] {
        &self.ledger
    }

    pub fn hours_by_employee(&self) -> Vec<EmployeeHours> {
        hours_by_employee(&self.ledger)
    }

    async fn commit_roster(&mut self, next: Vec<Employee>) -> Result<(), ApplicationError> {
        if let Err(err) = self.repository.save_roster(&next).await {
            warn!(error = %err, "roster not saved, change discarded");
            return Err(err.into());
        }
        self.roster = next;
        Ok(())
    }

    async fn commit_ledger(&mut self, next: Vec<TimeEntry>) -> Result<(), ApplicationError> {
        if let Err(err) = self.repository.save_ledger(&next).await {
            warn!(error = %err, "ledger not saved, change discarded");
            return Err(err.into());
        }
        self.ledger = next;
        Ok(())
    }
}
