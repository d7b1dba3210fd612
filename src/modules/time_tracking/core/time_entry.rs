// Ledger row: one employee's work record for one calendar date.
//
// Purpose
// - Carry clock-in and clock-out as minute-precision times of day and the derived total hours.
//
// Persisted shape
// - camelCase keys, date as YYYY-MM-DD, times as HH:MM, totalHours as a number.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub clock_in: Option<NaiveTime>,
    #[serde(with = "hh_mm")]
    pub clock_out: Option<NaiveTime>,
    pub total_hours: f64,
}

impl TimeEntry {
    pub fn open(
        id: impl Into<String>,
        employee_id: impl Into<String>,
        date: NaiveDate,
        clock_in: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            employee_id: employee_id.into(),
            date,
            clock_in: Some(clock_in),
            clock_out: None,
            total_hours: 0.0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_none()
    }

    pub fn belongs_to(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.employee_id == employee_id && self.date == date
    }
}

/// Hours between two times of the same date, rounded to two decimals. Negative when `clock_out`
/// precedes `clock_in`.
pub fn worked_hours(clock_in: NaiveTime, clock_out: NaiveTime) -> f64 {
    let seconds = (clock_out - clock_in).num_seconds() as f64;
    round_hours(seconds / 3600.0)
}

pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        NaiveTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map(Some)
            .map_err(|err| D::Error::custom(format!("invalid time of day {raw:?}: {err}")))
    }
}
