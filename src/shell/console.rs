// Line based console over the time tracking store.
//
// Purpose
// - Parse one command per input line and run it against the store.
// - Keep the routing split: employee commands need a session, admin commands need an admin
//   session.
//
// Boundaries
// - Plain text in, plain text out. Rejections and storage failures are reported on the output
//   and the loop keeps going; only I/O errors on the console itself end it.

use crate::modules::time_tracking::application::store::TimeTrackingStore;
use crate::modules::time_tracking::core::employee::Employee;
use crate::modules::time_tracking::core::ports::TimeTrackingRepository;
use crate::modules::time_tracking::core::time_entry::TimeEntry;
use crate::modules::time_tracking::use_cases::manage_roster::command::{EmployeePatch, NewEmployee};
use crate::shared::core::primitives::Clock;
use std::fmt::Write as _;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

pub const HELP: &str = "\
commands:
  login <email> <password>   start a session
  logout                     end the session
  whoami                     show the session user
  status                     show today's entry
  clock-in                   open today's entry
  clock-out                  close today's entry
  history                    list your entries
admin commands:
  employees                  list the roster
  add-employee <email> <department> <position> <name...>
  deactivate <id>            block an employee from logging in
  activate <id>              allow an employee to log in again
  delete-employee <id>       remove an employee and their entries
  entries                    list every entry
  summary                    hours per employee
  help                       show this text
  quit                       leave
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Employee,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Help,
    Quit,
    Login { email: String, password: String },
    Logout,
    WhoAmI,
    Status,
    ClockIn,
    ClockOut,
    History,
    Employees,
    AddEmployee(NewEmployee),
    Deactivate(String),
    Activate(String),
    DeleteEmployee(String),
    Entries,
    Summary,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl ConsoleCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let command = match (name, args.as_slice()) {
            ("help", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            ("login", [email, password]) => Self::Login {
                email: email.to_string(),
                password: password.to_string(),
            },
            ("login", _) => return Err(ParseError::Usage("login <email> <password>")),
            ("logout", []) => Self::Logout,
            ("whoami", []) => Self::WhoAmI,
            ("status", []) => Self::Status,
            ("clock-in", []) => Self::ClockIn,
            ("clock-out", []) => Self::ClockOut,
            ("history", []) => Self::History,
            ("employees", []) => Self::Employees,
            ("add-employee", [email, department, position, name @ ..]) if !name.is_empty() => {
                Self::AddEmployee(NewEmployee {
                    name: name.join(" "),
                    email: email.to_string(),
                    department: department.to_string(),
                    position: position.to_string(),
                    is_active: true,
                    password: None,
                })
            }
            ("add-employee", _) => {
                return Err(ParseError::Usage(
                    "add-employee <email> <department> <position> <name...>",
                ));
            }
            ("deactivate", [id]) => Self::Deactivate(id.to_string()),
            ("deactivate", _) => return Err(ParseError::Usage("deactivate <id>")),
            ("activate", [id]) => Self::Activate(id.to_string()),
            ("activate", _) => return Err(ParseError::Usage("activate <id>")),
            ("delete-employee", [id]) => Self::DeleteEmployee(id.to_string()),
            ("delete-employee", _) => return Err(ParseError::Usage("delete-employee <id>")),
            ("entries", []) => Self::Entries,
            ("summary", []) => Self::Summary,
            (other, _) => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }

    pub fn access(&self) -> Access {
        match self {
            Self::Help | Self::Quit | Self::Login { .. } | Self::Logout => Access::Public,
            Self::WhoAmI | Self::Status | Self::ClockIn | Self::ClockOut | Self::History => {
                Access::Employee
            }
            Self::Employees
            | Self::AddEmployee(_)
            | Self::Deactivate(_)
            | Self::Activate(_)
            | Self::DeleteEmployee(_)
            | Self::Entries
            | Self::Summary => Access::Admin,
        }
    }
}

/// Reads commands from `input` until `quit` or end of input, writing replies to `output`.
pub async fn run<TRepository, TClock, TInput, TOutput>(
    store: &mut TimeTrackingStore<TRepository, TClock>,
    input: TInput,
    mut output: TOutput,
) -> std::io::Result<()>
where
    TRepository: TimeTrackingRepository + 'static,
    TClock: Clock + 'static,
    TInput: AsyncBufRead + Unpin,
    TOutput: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let reply = match ConsoleCommand::parse(&line) {
            Ok(None) => continue,
            Ok(Some(ConsoleCommand::Quit)) => break,
            Ok(Some(command)) => execute(store, command).await,
            Err(err) => err.to_string(),
        };
        output.write_all(reply.as_bytes()).await?;
        if !reply.ends_with('\n') {
            output.write_all(b"\n").await?;
        }
        output.flush().await?;
    }
    Ok(())
}

/// Runs one parsed command and renders the reply.
pub async fn execute<TRepository, TClock>(
    store: &mut TimeTrackingStore<TRepository, TClock>,
    command: ConsoleCommand,
) -> String
where
    TRepository: TimeTrackingRepository + 'static,
    TClock: Clock + 'static,
{
    match command.access() {
        Access::Employee if store.session().is_none() => return "not logged in".to_string(),
        Access::Admin if !store.is_admin() => return "admin session required".to_string(),
        _ => {}
    }
    debug!(?command, "console command");

    match command {
        ConsoleCommand::Help => HELP.to_string(),
        ConsoleCommand::Quit => String::new(),
        ConsoleCommand::Login { email, password } => match store.login(&email, &password).await {
            Ok(session) if session.is_admin => format!("welcome {} (admin)", session.user.name),
            Ok(session) => format!("welcome {}", session.user.name),
            Err(err) => format!("error: {err}"),
        },
        ConsoleCommand::Logout => {
            store.logout();
            "logged out".to_string()
        }
        ConsoleCommand::WhoAmI => match store.current_user() {
            Some(user) => format!(
                "{} <{}> {} / {} (id {})",
                user.name, user.email, user.department, user.position, user.id
            ),
            None => "not logged in".to_string(),
        },
        ConsoleCommand::Status => match store.current_entry() {
            Some(entry) if entry.is_open() => format!("clocked in since {}", hh_mm(entry.clock_in)),
            Some(entry) => format!(
                "done for today: {} - {} ({:.2} h)",
                hh_mm(entry.clock_in),
                hh_mm(entry.clock_out),
                entry.total_hours
            ),
            None => "not clocked in today".to_string(),
        },
        ConsoleCommand::ClockIn => match store.clock_in().await {
            Ok(entry) => format!("clocked in at {}", hh_mm(entry.clock_in)),
            Err(err) => format!("error: {err}"),
        },
        ConsoleCommand::ClockOut => match store.clock_out().await {
            Ok(entry) => format!(
                "clocked out at {} ({:.2} h)",
                hh_mm(entry.clock_out),
                entry.total_hours
            ),
            Err(err) => format!("error: {err}"),
        },
        ConsoleCommand::History => {
            let user_id = store
                .current_user()
                .map(|user| user.id.clone())
                .unwrap_or_default();
            render_entries(&store.employee_time_entries(&user_id))
        }
        ConsoleCommand::Employees => render_employees(store.employees()),
        ConsoleCommand::AddEmployee(new_employee) => match store.add_employee(new_employee).await {
            Ok(employee) => format!("added {} (id {})", employee.name, employee.id),
            Err(err) => format!("error: {err}"),
        },
        ConsoleCommand::Deactivate(id) => set_active(store, &id, false).await,
        ConsoleCommand::Activate(id) => set_active(store, &id, true).await,
        ConsoleCommand::DeleteEmployee(id) => match store.delete_employee(&id).await {
            Ok(removed) => format!("deleted {id} and {removed} time entries"),
            Err(err) => format!("error: {err}"),
        },
        ConsoleCommand::Entries => render_entries(store.all_time_entries()),
        ConsoleCommand::Summary => {
            let summary = store.hours_by_employee();
            if summary.is_empty() {
                return "no time entries".to_string();
            }
            let mut out = String::new();
            for row in summary {
                let _ = writeln!(
                    out,
                    "{:<12} {:>3} entries {:>2} open {:>7.2} h",
                    row.employee_id, row.entries, row.open_entries, row.total_hours
                );
            }
            out
        }
    }
}

async fn set_active<TRepository, TClock>(
    store: &mut TimeTrackingStore<TRepository, TClock>,
    id: &str,
    is_active: bool,
) -> String
where
    TRepository: TimeTrackingRepository + 'static,
    TClock: Clock + 'static,
{
    let patch = EmployeePatch::default().is_active(is_active);
    match store.update_employee(id, patch).await {
        Ok(employee) if employee.is_active => format!("{} is active", employee.name),
        Ok(employee) => format!("{} is inactive", employee.name),
        Err(err) => format!("error: {err}"),
    }
}

fn render_employees(roster: &[Employee]) -> String {
    if roster.is_empty() {
        return "no employees".to_string();
    }
    let mut out = String::new();
    for employee in roster {
        let _ = writeln!(
            out,
            "{:<12} {:<20} {:<28} {:<14} {:<22} {}",
            employee.id,
            employee.name,
            employee.email,
            employee.department,
            employee.position,
            if employee.is_active { "active" } else { "inactive" }
        );
    }
    out
}

fn render_entries(entries: &[TimeEntry]) -> String {
    if entries.is_empty() {
        return "no time entries".to_string();
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{} {:<12} {} - {} {:>6.2} h",
            entry.date,
            entry.employee_id,
            hh_mm(entry.clock_in),
            hh_mm(entry.clock_out),
            entry.total_hours
        );
    }
    out
}

fn hh_mm(time: Option<chrono::NaiveTime>) -> String {
    time.map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

#[cfg(test)]
mod console_command_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("help", ConsoleCommand::Help)]
    #[case("exit", ConsoleCommand::Quit)]
    #[case("  clock-in  ", ConsoleCommand::ClockIn)]
    #[case("deactivate 3", ConsoleCommand::Deactivate("3".to_string()))]
    #[case("login a@b.c pw", ConsoleCommand::Login { email: "a@b.c".to_string(), password: "pw".to_string() })]
    fn it_should_parse_commands(#[case] line: &str, #[case] expected: ConsoleCommand) {
        assert_eq!(ConsoleCommand::parse(line), Ok(Some(expected)));
    }

    #[rstest]
    fn it_should_join_the_employee_name() {
        let parsed = ConsoleCommand::parse("add-employee ada@company.com Research Analyst Ada King");
        let Ok(Some(ConsoleCommand::AddEmployee(new_employee))) = parsed else {
            panic!("expected add-employee, got {parsed:?}");
        };
        assert_eq!(new_employee.name, "Ada King");
        assert_eq!(new_employee.position, "Analyst");
        assert!(new_employee.is_active);
        assert_eq!(new_employee.password, None);
    }

    #[rstest]
    #[case("", Ok(None))]
    #[case("login only-email", Err(ParseError::Usage("login <email> <password>")))]
    #[case("add-employee a@b.c Dept Pos", Err(ParseError::Usage("add-employee <email> <department> <position> <name...>")))]
    #[case("dance", Err(ParseError::Unknown("dance".to_string())))]
    fn it_should_reject_malformed_lines(
        #[case] line: &str,
        #[case] expected: Result<Option<ConsoleCommand>, ParseError>,
    ) {
        assert_eq!(ConsoleCommand::parse(line), expected);
    }

    #[rstest]
    #[case(ConsoleCommand::Logout, Access::Public)]
    #[case(ConsoleCommand::History, Access::Employee)]
    #[case(ConsoleCommand::Summary, Access::Admin)]
    fn it_should_classify_access(#[case] command: ConsoleCommand, #[case] expected: Access) {
        assert_eq!(command.access(), expected);
    }
}
