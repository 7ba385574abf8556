// Date utility functions
// Lenient instant parsing shared by the occurrence models

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses an occurrence date string into an absolute instant.
///
/// Accepted shapes, in order:
/// * RFC 3339 with an explicit offset (`2025-11-09T10:00:00Z`)
/// * a naive date-time, read in the local time zone (`2025-11-09T10:00`)
/// * a bare date, read as midnight UTC (`2025-11-09`)
///
/// Returns `None` for anything else. Callers treat `None` exactly like a
/// missing date, so this never fails loudly.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            // Skipped local times (DST gap) have no instant
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Midnight at the start of `date` in `tz`, or `None` if midnight falls in a DST gap.
pub fn midnight_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    date.and_hms_opt(0, 0, 0)
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
}
