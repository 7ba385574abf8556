//! Text rendering for the terminal front end.

use chrono::{DateTime, NaiveDate, TimeZone};

use crate::models::countdown::CountdownSnapshot;
use crate::models::occurrence::Occurrence;
use crate::models::status::AnnotatedOccurrence;

pub const COMING_SOON: &str = "Coming Soon";

/// Occurrence date in `tz`, or "Coming Soon" when it has none.
pub fn format_occurrence_date<Tz>(occurrence: &Occurrence, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match occurrence.parsed_date() {
        Some(date) => date
            .with_timezone(tz)
            .format("%a, %d %b %Y, %I:%M %p")
            .to_string(),
        None => COMING_SOON.to_string(),
    }
}

/// Short session date, e.g. "7 Dec 2025".
pub fn format_session_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

pub fn format_countdown(snapshot: &CountdownSnapshot) -> String {
    let padded = snapshot.padded();
    format!(
        "{}d {}h {}m {}s",
        padded.days, padded.hours, padded.minutes, padded.seconds
    )
}

/// One line per occurrence: status, label, title, date and venue.
pub fn format_status_line<Tz>(annotated: &AnnotatedOccurrence, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let marker = if annotated.is_next() { "▶" } else { " " };
    let occurrence = &annotated.occurrence;
    format!(
        "{} [{:<11}] {:<10} {}  ·  {}  ·  {}",
        marker,
        annotated.status.label(),
        occurrence.label,
        occurrence.title,
        format_occurrence_date(occurrence, tz),
        occurrence.location
    )
}

/// Heading above the countdown, or a notice when nothing is scheduled.
pub fn format_countdown_heading<Tz>(snapshot: &CountdownSnapshot, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match (&snapshot.target, snapshot.target_at) {
        (Some(target), Some(at)) => format!(
            "Next: {} ({})",
            target.title,
            at.with_timezone(tz).format("%a, %d %b %Y, %I:%M %p")
        ),
        _ => "No upcoming workshop scheduled".to_string(),
    }
}

pub fn format_instant<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    instant.format("%Y-%m-%d %H:%M:%S %:z").to_string()
}
