use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Cadence at which a recurring transaction repeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceInterval {
    Daily,
    Weekly,
    Monthly,
}

impl RecurrenceInterval {
    /// Calculates the date exactly one calendar unit after `from`.
    ///
    /// Month arithmetic clamps to the last valid day of the target month,
    /// so Jan 31 + 1 month lands on Feb 28 (or Feb 29 in a leap year).
    pub fn next_date(self, from: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            RecurrenceInterval::Daily => from + Duration::days(1),
            RecurrenceInterval::Weekly => from + Duration::weeks(1),
            RecurrenceInterval::Monthly => shift_month(from, 1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecurrenceInterval::Daily => "Daily",
            RecurrenceInterval::Weekly => "Weekly",
            RecurrenceInterval::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for RecurrenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn shift_month(from: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let date = from.date_naive();
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    let shifted = NaiveDate::from_ymd_opt(year, month as u32, day).unwrap();
    shifted.and_time(from.time()).and_utc()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}
