// Process configuration, read from environment variables once at startup.
//
// Boundaries
// - Values come from the process environment, optionally primed from a `.env` file by the
//   binary. Unset or unparsable values fall back to defaults.

use crate::modules::time_tracking::core::seed::{
    ADMIN_EMAIL, ADMIN_PASSWORD, LEGACY_EMAIL, LEGACY_PASSWORD, SeedAccount, SeedAccounts,
};
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./time_clock_data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding one JSON document per storage key.
    pub data_dir: PathBuf,
    pub admin_email: String,
    pub admin_password: String,
    /// Whether the legacy demo employee login is accepted.
    pub legacy_login: bool,
    pub legacy_email: String,
    pub legacy_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            admin_email: ADMIN_EMAIL.to_string(),
            admin_password: ADMIN_PASSWORD.to_string(),
            legacy_login: true,
            legacy_email: LEGACY_EMAIL.to_string(),
            legacy_password: LEGACY_PASSWORD.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: lookup("TIME_CLOCK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            admin_email: lookup("TIME_CLOCK_ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_password: lookup("TIME_CLOCK_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            legacy_login: lookup("TIME_CLOCK_LEGACY_LOGIN")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.legacy_login),
            legacy_email: lookup("TIME_CLOCK_LEGACY_EMAIL").unwrap_or(defaults.legacy_email),
            legacy_password: lookup("TIME_CLOCK_LEGACY_PASSWORD")
                .unwrap_or(defaults.legacy_password),
        }
    }

    pub fn seed_accounts(&self) -> SeedAccounts {
        let mut accounts = vec![SeedAccount::admin(&self.admin_email, &self.admin_password)];
        if self.legacy_login {
            accounts.push(SeedAccount::legacy_employee(
                &self.legacy_email,
                &self.legacy_password,
            ));
        }
        SeedAccounts::new(accounts)
    }
}
