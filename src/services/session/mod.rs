//! The standing "every first Sunday" rule behind the event details panel.
//!
//! Independent of the catalog: this answers "when is the next monthly
//! session" even before individual occurrences are announced.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

use crate::utils::date::midnight_in;

/// Monthly session on the first given weekday of each month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRule {
    pub weekday: Weekday,
}

impl Default for SessionRule {
    fn default() -> Self {
        Self {
            weekday: Weekday::Sun,
        }
    }
}

impl SessionRule {
    pub fn new(weekday: Weekday) -> Self {
        Self { weekday }
    }

    /// Human description, e.g. "Every 1st Sunday".
    pub fn describe(&self) -> String {
        format!("Every 1st {}", weekday_name(self.weekday))
    }

    /// Date of the next session as seen from `now`.
    ///
    /// This month's session counts as passed as soon as its midnight is
    /// behind `now`; the following month's date is returned from then on.
    pub fn next_session<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> NaiveDate {
        let today = now.date_naive();
        let this_month = first_weekday_of_month(today.year(), today.month(), self.weekday);

        let passed = match midnight_in(this_month, &now.timezone()) {
            Some(midnight) => midnight < *now,
            None => this_month <= today,
        };
        if !passed {
            return this_month;
        }

        let (year, month) = if today.month() == 12 {
            (today.year() + 1, 1)
        } else {
            (today.year(), today.month() + 1)
        };
        first_weekday_of_month(year, month, self.weekday)
    }
}

/// First `weekday` of the month. Every month has one within its first seven days.
pub fn first_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default();
    let offset = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    first + chrono::Duration::days(i64::from(offset))
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
